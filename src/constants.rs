// src/constants.rs

pub const INPUT_PATH: &str = "public/vision-ai-logo.png";
pub const OUTPUT_PATH: &str = "src/assets/visionAiLogoBase64.ts";

pub const CONST_NAME: &str = "VISION_AI_LOGO_BASE64";
pub const MIME_TYPE: &str = "image/png";

pub const SUCCESS_MESSAGE: &str = "Base64 logo file created successfully!";
pub const SNIPPET_HEADER: &str = "// Vision AI Logo as Base64 Data URL";
