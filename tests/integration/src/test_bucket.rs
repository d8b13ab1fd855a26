//! Bucket lifecycle tests.

#[cfg(test)]
mod tests {
    use s3sign_auth::Canonicalization;
    use s3sign_client::{CreateBucket, ListBucket, S3Client};
    use s3sign_core::S3ClientConfig;

    use crate::{s3_client, test_bucket, test_bucket_name};

    #[tokio::test]
    #[ignore = "requires S3-compatible endpoint"]
    async fn test_should_create_bucket_in_configured_region() {
        let client = s3_client();
        let bucket = test_bucket_name("mb");

        let response = client
            .send(
                &CreateBucket::in_location(&bucket, client.region().as_str())
                    .expect("create descriptor"),
            )
            .await
            .expect("create_bucket");
        assert!(
            response.status().is_success(),
            "status: {} body: {}",
            response.status(),
            String::from_utf8_lossy(response.body())
        );
    }

    #[tokio::test]
    #[ignore = "requires S3-compatible endpoint"]
    async fn test_should_list_bucket_in_strict_mode() {
        let mut config = S3ClientConfig::from_env();
        config.canonicalization = Canonicalization::Strict;
        let client = S3Client::new(&config).expect("client");

        let response = client
            .send(
                &ListBucket::new(test_bucket())
                    .expect("list descriptor")
                    .with_prefix("s3sign-test/"),
            )
            .await
            .expect("list_bucket");
        assert!(
            response.status().is_success(),
            "status: {}",
            response.status()
        );
    }
}
