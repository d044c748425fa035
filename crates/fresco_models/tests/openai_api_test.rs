use fresco_core::{CompletionRequest, ImageRequest, Message, Role};
use fresco_interface::{ImageDriver, TextDriver};
use fresco_models::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, OpenAiImageDriver, OpenAiTextDriver};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_text_completion() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let driver = OpenAiTextDriver::new(DEFAULT_TEXT_MODEL)?;

    let message = Message::new(Role::User, "Hello");

    let request = CompletionRequest::builder()
        .messages(vec![message])
        .max_tokens(Some(10))
        .build()?;

    let response = driver.complete(&request).await?;

    assert!(!response.text().is_empty(), "Should receive non-empty response");
    println!("Response: {}", response.text());

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_model_override() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let models = vec!["gpt-4o-mini", "gpt-4o"];

    for model in models {
        println!("Testing model: {}", model);

        let driver = OpenAiTextDriver::new(model)?;

        let message = Message::new(Role::User, "Hi");

        let request = CompletionRequest::builder()
            .messages(vec![message])
            .max_tokens(Some(5))
            .build()?;

        match driver.complete(&request).await {
            Ok(response) => {
                println!("  ✓ {} works", model);
                assert!(!response.text().is_empty());
            }
            Err(e) => {
                println!("  ✗ {} failed: {}", model, e);
            }
        }
    }

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_image_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let driver = OpenAiImageDriver::new(DEFAULT_IMAGE_MODEL)?;

    let request = ImageRequest::new(
        "A single red circle on a plain white background",
        DEFAULT_IMAGE_MODEL,
    );

    let image = driver.generate(&request).await?;

    assert!(!image.bytes().is_empty(), "Should receive image bytes");
    println!("Received {} image bytes", image.bytes().len());

    Ok(())
}
