#![warn(missing_docs, missing_debug_implementations)]

//! Check whether usernames are still available on Twitch.
//!
//! This library probes the Twitch passport endpoint with a HEAD request per
//! username and classifies the response status: 200 means the name is taken,
//! 204 means it is free, and 403 means the endpoint is rate limiting -- in
//! which case the probe is repeated until a definitive answer arrives.
//! Candidate names come either from a line-oriented file or from exhaustive
//! generation over the `[a-z0-9]` alphabet.
//!
//! # Example
//!
//! ```no_run
//! use twitch_avail::check::{Client, check_name};
//!
//! let client = Client::new();
//! match check_name(&client, "ninja") {
//!     Ok(result) if result.is_available() => println!("go grab it!"),
//!     Ok(result) => println!("taken or unknown (HTTP {})", result.status_code),
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! ```

pub mod check;
pub mod names;
pub mod report;
pub mod style;
