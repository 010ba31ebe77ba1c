/// Development utilities module
///
/// This module contains utilities for development and testing, such as a
/// client serving fixture data.

pub mod mock_client;
