//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Navigator, Node, Window};

use crate::core::error::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the navigator object.
#[inline]
pub fn navigator() -> Option<Navigator> {
    Some(window()?.navigator())
}

/// Read the live text content of a mounted node.
///
/// `id` only names the element in the error when the node is missing.
pub fn text_content<N>(node: Option<N>, id: &'static str) -> Result<String, DomError>
where
    N: AsRef<Node>,
{
    let node = node.ok_or(DomError::MissingElement(id))?;
    Ok(node.as_ref().text_content().unwrap_or_default())
}
