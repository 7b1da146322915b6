use base64::{engine::general_purpose, Engine as _};

pub fn encode_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, encode_base64(bytes))
}

/// Renders the generated source module: one exported constant, double
/// quoted, terminated by `;` and a single newline.
pub fn render_module(const_name: &str, data_url: &str) -> String {
    format!("export const {} = \"{}\";\n", const_name, data_url)
}

/// Renders the copy-paste variant printed to stdout: a header comment and a
/// single quoted constant.
pub fn render_snippet(const_name: &str, data_url: &str) -> String {
    format!(
        "{}\nexport const {} = '{}';\n",
        crate::constants::SNIPPET_HEADER,
        const_name,
        data_url
    )
}

/// Extracts the payload bytes from text produced by [`render_module`].
pub fn decode_module(text: &str) -> Option<Vec<u8>> {
    let line = text.strip_suffix('\n')?;
    let rest = line.strip_prefix("export const ")?;
    let (_, value) = rest.split_once(" = \"")?;
    let url = value.strip_suffix("\";")?;
    let (_, payload) = url.strip_prefix("data:")?.split_once(";base64,")?;
    general_purpose::STANDARD.decode(payload).ok()
}
