use libzenmux::prelude::*;
use std::path::PathBuf;
use tokio::task::spawn_blocking;

const MODEL: &str = "google/gemini-3-pro-image-preview";
const DEFAULT_INPUT: &str = "poster_images/poster2.png";
const DEFAULT_LANGUAGE: &str = "English";
const DEFAULT_OUTPUT: &str = "generated_image.png";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let language = args.next().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));

    let client = Client::new(
        None, // Gets api key from `ZENMUX_API_KEY` enviroment variable
    )?;

    // Load local image
    let poster = spawn_blocking(move || load_image(input)).await.unwrap()?;

    let prompt = format!(
        "Identify the text in this image and translate it into {language}. \
         Repaint the translated text into the original image, filling the \
         background back in so the visual context of the original is kept \
         intact, then output the generated image."
    );

    let generation = Generation::builder(MODEL)
        .text(prompt)
        .image(poster)
        .response_modalities([ResponseModality::Image])?
        .build(&client)
        .await?;

    for part in generation.parts() {
        match part {
            Part::Text { text } => println!("{text}"),
            Part::InlineData { inline_data } => {
                inline_data.save(&output)?;
                println!("Image saved as {}", output.display());
            }
            Part::Unknown(value) => tracing::warn!("ignoring unsupported response part: {value}"),
        }
    }

    return Ok(());
}
