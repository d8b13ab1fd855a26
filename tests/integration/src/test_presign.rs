//! Presigned URL tests.

#[cfg(test)]
mod tests {
    use s3sign_client::{DeleteObject, PutObject};

    use crate::{s3_client, test_bucket, test_key};

    #[tokio::test]
    #[ignore = "requires S3-compatible endpoint"]
    async fn test_should_download_through_presigned_url() {
        let client = s3_client();
        let bucket = test_bucket();
        let key = test_key("presign");

        client
            .send(
                &PutObject::new(&bucket, &key, "presigned body")
                    .expect("put descriptor"),
            )
            .await
            .expect("put_object");

        let presigned = client
            .presigned_url(&bucket, &key, Some(300))
            .expect("presign");
        let response = reqwest::get(presigned.url.as_str())
            .await
            .expect("GET presigned");
        assert!(
            response.status().is_success(),
            "status: {}",
            response.status()
        );
        assert_eq!(response.text().await.expect("body"), "presigned body");

        let _ = client
            .send(&DeleteObject::new(&bucket, &key).expect("delete request"))
            .await;
    }

    #[tokio::test]
    #[ignore = "requires S3-compatible endpoint"]
    async fn test_should_reject_tampered_presigned_url() {
        let client = s3_client();
        let bucket = test_bucket();
        let key = test_key("tampered");

        let presigned = client
            .presigned_url(&bucket, &key, Some(300))
            .expect("presign");
        let tampered = presigned
            .url
            .replace("X-Amz-Expires=300", "X-Amz-Expires=301");
        let response = reqwest::get(tampered).await.expect("GET tampered");
        assert_eq!(response.status(), reqwest::StatusCode::FORBIDDEN);
    }
}
