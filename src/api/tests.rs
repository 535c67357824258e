use super::*;
use crate::canvas::Point;

#[test]
fn test_request_wire_field_names() {
    let request = KMeansRequest {
        k: 2,
        init_method: InitMethod::Manual,
        data: vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)],
        selected_points: vec![Point::new(1.0, 1.0), Point::new(-2.0, 3.0)],
    };

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(json["k"], 2);
    assert_eq!(json["initMethod"], "manual");
    assert_eq!(json["data"][1][1], 2.0);
    // Click order survives serialization.
    assert_eq!(json["selectedPoints"][0][0], 1.0);
    assert_eq!(json["selectedPoints"][1][0], -2.0);
}

#[test]
fn test_init_method_wire_strings() {
    let encode = |method| serde_json::to_string(&method).unwrap();
    assert_eq!(encode(InitMethod::Random), "\"random\"");
    assert_eq!(encode(InitMethod::FarthestFirst), "\"farthest\"");
    assert_eq!(encode(InitMethod::KMeansPlusPlus), "\"kmeans++\"");
    assert_eq!(encode(InitMethod::Manual), "\"manual\"");
}

#[test]
fn test_response_decoding() {
    let body = r#"{
        "centers": [[[0.0, 0.0], [2.0, 2.0]], [[0.5, 0.5], [2.5, 2.5]]],
        "assignments": [[0, 1, 1], [0, 0, 1]]
    }"#;

    let response: KMeansResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.centers.len(), 2);
    assert_eq!(response.assignments.len(), 2);
    assert_eq!(response.centers[1][0], Point::new(0.5, 0.5));
    assert_eq!(response.assignments[0], vec![0, 1, 1]);
}

#[test]
fn test_dataset_decoding() {
    let body = "[[1.0, -2.0], [3.5, 4.0]]";
    let dataset: Vec<Point> = serde_json::from_str(body).unwrap();
    assert_eq!(dataset, vec![Point::new(1.0, -2.0), Point::new(3.5, 4.0)]);
}

// Integration tests - require the Flask backend running on the default port.

#[tokio::test]
#[ignore]
async fn test_fetch_data_round_trip() {
    let client = KMeansClient::new(DEFAULT_ENDPOINT);
    let dataset = client.fetch_data().await.unwrap();

    assert_eq!(dataset.len(), 300);
}

#[tokio::test]
#[ignore]
async fn test_run_kmeans_round_trip() {
    let client = KMeansClient::new(DEFAULT_ENDPOINT);
    let data = client.fetch_data().await.unwrap();

    let request = KMeansRequest {
        k: 3,
        init_method: InitMethod::Random,
        data: data.clone(),
        selected_points: vec![],
    };
    let response = client.run_kmeans(&request).await.unwrap();

    assert_eq!(response.centers.len(), response.assignments.len());
    assert!(!response.centers.is_empty());
    assert_eq!(response.centers[0].len(), 3);
    assert_eq!(response.assignments[0].len(), data.len());
}
