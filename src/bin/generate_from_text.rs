use libzenmux::prelude::*;
use std::path::PathBuf;

const MODEL: &str = "google/gemini-3-pro-image-preview";
const DEFAULT_OUTPUT: &str = "generated_image.png";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let output = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(DEFAULT_OUTPUT),
    };

    let client = Client::new(
        None, // Gets api key from `ZENMUX_API_KEY` enviroment variable
    )?;

    // Text generation
    let answer = Generation::new(MODEL, "How does AI work?", &client).await?;
    println!("{}", answer.text());

    // Image generation
    let generation = Generation::builder(MODEL)
        .text("Create a picture of a nano banana dish in a fancy restaurant with a Gemini theme")
        .response_modalities([ResponseModality::Text, ResponseModality::Image])?
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
