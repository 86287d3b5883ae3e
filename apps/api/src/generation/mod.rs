// Blog post generation: request resolution, template composition, export helpers.
// Everything below `handlers` is pure and synchronous.

pub mod composer;
pub mod context;
pub mod export;
pub mod handlers;
pub mod keywords;
pub mod length;
pub mod sections;
pub mod tone;
