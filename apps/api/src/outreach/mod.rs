//! Outreach drafting: prompt templates, the model call and the helpers that
//! turn a job into something the user can send.

pub mod generator;
pub mod handlers;
pub mod mailto;
pub mod prompts;
pub mod response;
pub mod templating;
