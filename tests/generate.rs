use libzenmux::prelude::*;
use std::io::Cursor;

fn png_bytes(pixel: [u8; 4]) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(1, 1, image::Rgba(pixel));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageOutputFormat::Png)
        .unwrap();
    return bytes.into_inner();
}

#[test]
fn client_reads_key_from_environment() -> anyhow::Result<()> {
    std::env::remove_var("ZENMUX_API_KEY");
    assert!(matches!(Client::new(None), Err(Error::Config(_))));

    std::env::set_var("ZENMUX_API_KEY", "test-key");
    Client::new(None)?;

    std::env::set_var("ZENMUX_API_KEY", "");
    assert!(matches!(Client::new(None), Err(Error::Config(_))));

    std::env::remove_var("ZENMUX_API_KEY");
    return Ok(());
}

#[test]
fn parts_are_handled_in_response_order() -> anyhow::Result<()> {
    let body = serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    { "text": "Hello" },
                    { "inlineData": {
                        "mimeType": "image/png",
                        "data": base64_of(&png_bytes([255, 0, 0, 255])),
                    }},
                    { "inlineData": {
                        "mimeType": "image/png",
                        "data": base64_of(&png_bytes([0, 0, 255, 255])),
                    }},
                ],
            },
            "finishReason": "STOP",
        }],
    });

    let generation: Generation = serde_json::from_value(body)?;

    let dir = tempfile::tempdir()?;
    let output = dir.path().join("generated_image.png");

    // same consumption loop as the binaries, with prints collected
    let mut printed = Vec::new();
    for part in generation.parts() {
        match part {
            Part::Text { text } => printed.push(text.clone()),
            Part::InlineData { inline_data } => {
                inline_data.save(&output)?;
                printed.push(format!("Image saved as {}", output.display()));
            }
            Part::Unknown(_) => unreachable!(),
        }
    }

    assert_eq!(printed[0], "Hello");
    assert_eq!(printed.len(), 3);
    assert!(std::fs::metadata(&output)?.len() > 0);

    // multiple image parts overwrite the same file; the last one wins
    let saved = image::open(&output)?.into_rgba8();
    assert_eq!(saved.get_pixel(0, 0).0, [0, 0, 255, 255]);

    return Ok(());
}

#[test]
fn local_image_round_trips_through_a_request_part() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let poster = dir.path().join("poster2.png");
    std::fs::write(&poster, png_bytes([7, 7, 7, 255]))?;

    let blob = load_image(&poster)?;
    assert_eq!(blob.mime_type, "image/png");

    let builder = Generation::builder("google/gemini-3-pro-image-preview")
        .text("translate the text in this image")
        .image(blob.clone())
        .response_modalities([ResponseModality::Image])
        .map_err(|e| e.into_error())?;

    let body = serde_json::to_value(&builder)?;
    assert_eq!(
        body["contents"][0]["parts"][1]["inlineData"]["data"],
        serde_json::Value::String(blob.data.clone())
    );
    assert_eq!(
        body["generationConfig"]["responseModalities"],
        serde_json::json!(["IMAGE"])
    );

    return Ok(());
}

#[test]
fn missing_input_image_fails_before_any_request_exists() {
    match load_image("poster_images/poster2.png") {
        Err(Error::Io(_)) => {}
        other => panic!("expected I/O error, got {other:?}"),
    }
}

fn base64_of(bytes: &[u8]) -> String {
    use base64::Engine;
    return base64::engine::general_purpose::STANDARD.encode(bytes);
}
