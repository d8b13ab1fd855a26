//! Object round-trip tests.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use s3sign_client::{
        CreateFolder, DeleteObject, GetObject, HeadObject, ListBucket, PutObject,
    };

    use crate::{s3_client, test_bucket, test_key};

    #[tokio::test]
    #[ignore = "requires S3-compatible endpoint"]
    async fn test_should_put_get_and_delete_object() {
        let client = s3_client();
        let bucket = test_bucket();
        let key = test_key("putget");
        let body = Bytes::from_static(b"hello, s3sign!");

        let put = client
            .send(
                &PutObject::new(&bucket, &key, body.clone())
                    .expect("put descriptor"),
            )
            .await
            .expect("put_object");
        assert!(put.status().is_success(), "put status: {}", put.status());

        let get = client
            .send(&GetObject::new(&bucket, &key).expect("get descriptor"))
            .await
            .expect("get_object");
        assert!(get.status().is_success(), "get status: {}", get.status());
        assert_eq!(get.body(), &body);

        let head = client
            .send(&HeadObject::new(&bucket, &key).expect("head descriptor"))
            .await
            .expect("head_object");
        assert!(head.status().is_success());
        assert_eq!(
            head.headers()
                .get(http::header::CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok()),
            Some("14")
        );

        let delete = client
            .send(&DeleteObject::new(&bucket, &key).expect("delete request"))
            .await
            .expect("delete_object");
        assert!(delete.status().is_success());
    }

    #[tokio::test]
    #[ignore = "requires S3-compatible endpoint"]
    async fn test_should_sign_keys_with_reserved_characters() {
        let client = s3_client();
        let bucket = test_bucket();
        let key = format!("{} (copy)!*'.txt", test_key("reserved"));

        let put = client
            .send(&PutObject::new(&bucket, &key, "x").expect("put descriptor"))
            .await
            .expect("put_object");
        assert!(put.status().is_success(), "put status: {}", put.status());

        let _ = client
            .send(&DeleteObject::new(&bucket, &key).expect("delete request"))
            .await;
    }

    #[tokio::test]
    #[ignore = "requires S3-compatible endpoint"]
    async fn test_should_list_folder_contents() {
        let client = s3_client();
        let bucket = test_bucket();
        let folder = test_key("folder").replace(".txt", "");

        let mkdir = client
            .send(
                &CreateFolder::new(&bucket, &folder)
                    .expect("folder descriptor"),
            )
            .await
            .expect("create_folder");
        assert!(mkdir.status().is_success());

        let list = client
            .send(
                &ListBucket::new(&bucket)
                    .expect("list descriptor")
                    .with_prefix(&folder),
            )
            .await
            .expect("list_bucket");
        assert!(list.status().is_success());
        let listing = String::from_utf8_lossy(list.body());
        assert!(listing.contains(&format!("{folder}/")));

        let _ = client
            .send(
                &DeleteObject::new(&bucket, format!("{folder}/"))
                    .expect("delete request"),
            )
            .await;
    }

    #[tokio::test]
    #[ignore = "requires S3-compatible endpoint"]
    async fn test_should_return_not_found_as_response() {
        let client = s3_client();
        let bucket = test_bucket();

        let response = client
            .send(
                &GetObject::new(&bucket, test_key("missing"))
                    .expect("get descriptor"),
            )
            .await
            .expect("transport should succeed");
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
    }
}
