mod deploy;
#[cfg(feature = "experimental")]
mod image_add;

pub use deploy::{DeployOpts, deploy};
#[cfg(feature = "experimental")]
pub use image_add::{ImageAddOpts, image_add};
