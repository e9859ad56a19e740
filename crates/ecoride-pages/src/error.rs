//! Error types for page loading.

/// Error raised while loading or rendering a page
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagesError {
	/// The fragment request never produced a response
	#[error("Failed to fetch {url}: {message}")]
	Fetch { url: String, message: String },

	/// The fragment request answered with a non-2xx status
	#[error("Fetching {url} returned HTTP {status}")]
	Status { url: String, status: u16 },

	/// An element the shell depends on is absent from the document
	#[error("Missing element: #{0}")]
	MissingElement(String),

	/// A browser API call failed
	#[error("DOM error: {0}")]
	Dom(String),
}
