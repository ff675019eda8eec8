mod base64_bodies {
    use crate::{LambdaResponse, NumericArray};

    #[test]
    fn test_encodes_bytes_and_sets_the_flag() {
        let response = LambdaResponse::new().base64_body(b"hello");
        assert_eq!(response.body(), Some("aGVsbG8="));
        assert!(response.is_base64_encoded());
    }

    #[test]
    fn test_buffer_converges_on_base64() {
        let response = LambdaResponse::new().send_buffer(b"hello");
        assert_eq!(response.body(), Some("aGVsbG8="));
        assert!(response.is_base64_encoded());
    }

    #[test]
    fn test_byte_valued_numeric_array() {
        let array = NumericArray::from(vec![104u8, 101, 108, 108, 111]);
        let response = LambdaResponse::new().send_numeric_array(&array);
        assert_eq!(response.body(), Some("aGVsbG8="));
        assert!(response.is_base64_encoded());
    }
}

mod numeric_arrays {
    use crate::NumericArray;

    #[test]
    fn test_u16_serializes_little_endian_pairs() {
        let array = NumericArray::from(vec![104u16, 101]);
        assert_eq!(array.to_bytes(), [104, 0, 101, 0]);
    }

    #[test]
    fn test_u32_serializes_four_bytes_per_element() {
        let array = NumericArray::from(vec![1u32]);
        assert_eq!(array.to_bytes(), [1, 0, 0, 0]);
    }

    #[test]
    fn test_i8_keeps_the_raw_byte() {
        let array = NumericArray::from(vec![-1i8]);
        assert_eq!(array.to_bytes(), [0xff]);
    }

    #[test]
    fn test_floats_serialize_their_bit_pattern() {
        let array = NumericArray::from(vec![1.0f32]);
        assert_eq!(array.to_bytes(), 1.0f32.to_le_bytes());

        let wide = NumericArray::from(vec![1.0f64, 2.0]);
        assert_eq!(wide.to_bytes().len(), 16);
    }
}

mod file_payloads {
    use std::error::Error;
    use std::io::Write;

    use crate::{LambdaResponse, ResponseError};

    #[test]
    fn test_reads_file_and_infers_content_type() -> Result<(), Box<dyn Error>> {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile()?;
        file.write_all(b"hello")?;

        let response = LambdaResponse::new().send_file(file.path())?;
        assert_eq!(response.body(), Some("aGVsbG8="));
        assert!(response.is_base64_encoded());
        assert_eq!(
            response.get_header("content-type").and_then(|v| v.as_str()),
            Some("image/png"),
        );
        Ok(())
    }

    #[test]
    fn test_extensionless_file_falls_back_to_octet_stream() -> Result<(), Box<dyn Error>> {
        let mut file = tempfile::Builder::new().suffix("").tempfile()?;
        file.write_all(b"raw")?;

        let response = LambdaResponse::new().send_file(file.path())?;
        assert_eq!(
            response.get_header("content-type").and_then(|v| v.as_str()),
            Some("application/octet-stream"),
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_fails() {
        let result = LambdaResponse::new().send_file("definitely/not/here.txt");
        assert!(matches!(result, Err(ResponseError::FileRead { .. })));
    }
}

mod stream_payloads {
    use std::io;

    use bytes::Bytes;
    use futures_util::stream;

    use crate::{LambdaResponse, ResponseError};

    #[tokio::test]
    async fn test_chunks_concatenate_in_arrival_order() -> Result<(), Box<dyn std::error::Error>> {
        let chunks = stream::iter(vec![
            Ok::<Bytes, io::Error>(Bytes::from_static(b"he")),
            Ok(Bytes::from_static(b"ll")),
            Ok(Bytes::from_static(b"o")),
        ]);

        let response = LambdaResponse::new().send_stream(chunks).await?;
        assert_eq!(response.body(), Some("aGVsbG8="));
        assert!(response.is_base64_encoded());
        Ok(())
    }

    #[tokio::test]
    async fn test_stream_error_propagates_without_a_partial_body() {
        let chunks = stream::iter(vec![
            Ok::<Bytes, io::Error>(Bytes::from_static(b"partial")),
            Err(io::Error::other("connection reset")),
        ]);

        let result = LambdaResponse::new().send_stream(chunks).await;
        assert!(matches!(result, Err(ResponseError::Stream(_))));
    }
}

mod unified_send {
    use std::error::Error;
    use std::io::Write;

    use bytes::Bytes;
    use futures_util::stream;

    use crate::{LambdaResponse, NumericArray, Payload};

    #[tokio::test]
    async fn test_path_stream_and_buffer_agree() -> Result<(), Box<dyn Error>> {
        let contents: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];
        let mut file = tempfile::Builder::new().suffix(".jpeg").tempfile()?;
        file.write_all(contents)?;

        let from_path = LambdaResponse::new()
            .send(Payload::from(file.path()))
            .await?;
        let from_buffer = LambdaResponse::new()
            .send(Payload::from(contents.to_vec()))
            .await?;
        let from_stream = LambdaResponse::new()
            .send(Payload::stream(stream::iter(vec![
                Ok::<Bytes, std::io::Error>(Bytes::copy_from_slice(&contents[..3])),
                Ok(Bytes::copy_from_slice(&contents[3..])),
            ])))
            .await?;

        assert_eq!(from_path.body(), from_buffer.body());
        assert_eq!(from_buffer.body(), from_stream.body());
        assert!(from_path.is_base64_encoded());
        assert!(from_buffer.is_base64_encoded());
        assert!(from_stream.is_base64_encoded());
        Ok(())
    }

    #[tokio::test]
    async fn test_array_payload_dispatches() -> Result<(), Box<dyn Error>> {
        let response = LambdaResponse::new()
            .send(Payload::from(NumericArray::from(vec![104u8, 101, 108, 108, 111])))
            .await?;
        assert_eq!(response.body(), Some("aGVsbG8="));
        Ok(())
    }
}

mod dispositions {
    use std::error::Error;

    use crate::{LambdaResponse, Payload, SendOptions};

    fn disposition_of(response: &LambdaResponse) -> Option<&str> {
        response.get_header("content-disposition").and_then(|v| v.as_str())
    }

    #[tokio::test]
    async fn test_attachment_with_filename() -> Result<(), Box<dyn Error>> {
        let response = LambdaResponse::new()
            .attachment(
                Payload::from(b"hello".to_vec()),
                SendOptions::with_filename("My Picture.jpeg"),
            )
            .await?;
        assert_eq!(disposition_of(&response), Some(r#"attachment; filename="My Picture.jpeg""#));
        assert_eq!(response.body(), Some("aGVsbG8="));
        Ok(())
    }

    #[tokio::test]
    async fn test_attachment_without_filename() -> Result<(), Box<dyn Error>> {
        let response = LambdaResponse::new()
            .attachment(Payload::from(b"hello".to_vec()), SendOptions::default())
            .await?;
        assert_eq!(disposition_of(&response), Some("attachment"));
        Ok(())
    }

    #[tokio::test]
    async fn test_inline_disposition() -> Result<(), Box<dyn Error>> {
        let response = LambdaResponse::new()
            .inline(Payload::from(b"hello".to_vec()), SendOptions::default())
            .await?;
        assert_eq!(disposition_of(&response), Some("inline"));
        Ok(())
    }

    #[tokio::test]
    async fn test_existing_disposition_is_preserved() -> Result<(), Box<dyn Error>> {
        let response = LambdaResponse::new()
            .set("Content-Disposition", "inline")?
            .attachment(Payload::from(b"hello".to_vec()), SendOptions::default())
            .await?;
        assert_eq!(disposition_of(&response), Some("inline"));
        Ok(())
    }
}
