// core/src/adapters/prompts.rs

use super::ImageArtifact;
use serde_json::Value;

pub const STYLE_CATEGORIES: [&str; 4] = ["African Native", "European", "Western", "Modern"];

pub const LOGO_PROMPT: &str = "A luxurious, elegant logo for a fashion brand named 'Zii-Empire'. Incorporate gold and deep blue colors, minimalist crown or needle element, sophisticated typography, white background.";

pub const MARKET_INTELLIGENCE_PROMPT: &str = "Generate 3 high-impact fashion news headlines and short summaries (20 words each) specifically about African fashion trends, Zii-Empire expansion, and global textile market shifts. Format as JSON array of objects with keys: title, summary, category.";

/// Aspect ratio requested for studio designs.
pub const DESIGN_ASPECT_RATIO: &str = "3:4";

pub fn design_prompt(prompt: &str, category: &str) -> String {
  format!(
    "A high-quality fashion design for {} attire. Description: {}. Professional fashion photography style, elegant, African heritage influence where applicable. High resolution.",
    category, prompt
  )
}

/// Finds the first inline image part of a `generateContent` response body.
pub fn image_from_response(body: &Value) -> Option<ImageArtifact> {
  body["candidates"]
    .as_array()
    .and_then(|candidates| candidates.first())
    .and_then(|candidate| candidate["content"]["parts"].as_array())
    .and_then(|parts| {
      parts
        .iter()
        .find_map(|part| part["inlineData"]["data"].as_str())
    })
    .map(ImageArtifact::from_inline_png)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn design_prompt_embeds_category_and_description() {
    let text = design_prompt("a gele-inspired wedding gown", "African Native");
    assert!(text.starts_with("A high-quality fashion design for African Native attire."));
    assert!(text.contains("Description: a gele-inspired wedding gown."));
  }

  #[test]
  fn first_inline_part_wins() {
    let body = json!({
      "candidates": [{
        "content": { "parts": [
          { "text": "Here is your design" },
          { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
          { "inlineData": { "mimeType": "image/png", "data": "BBBB" } }
        ]}
      }]
    });
    assert_eq!(
      image_from_response(&body),
      Some(ImageArtifact("data:image/png;base64,AAAA".to_string()))
    );
  }

  #[test]
  fn text_only_response_has_no_image() {
    let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "sorry" }] } }] });
    assert_eq!(image_from_response(&body), None);
    assert_eq!(image_from_response(&json!({})), None);
  }
}
