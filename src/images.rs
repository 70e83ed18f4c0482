//! Image host collaborator
//!
//! The showcase never touches pixels. It hands an opaque image id to an
//! [`ImageHost`] and gets back the URL of an optimised rendition.

use crate::config::ImagesConfig;
use crate::constants::CLOUDINARY_BASE_URL;
use anyhow::Result;

pub trait ImageHost {
    /// URL of a quality/format-optimised, width-scaled rendition of `image_id`
    fn url(&self, image_id: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryHost {
    cloud_name: String,
    width: u32,
}

impl CloudinaryHost {
    pub fn new(cloud_name: impl Into<String>, width: u32) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            width,
        }
    }

    /// Read the cloud name from the variable named in the config
    pub fn from_env(config: &ImagesConfig) -> Result<Self> {
        let cloud_name = std::env::var(&config.cloud_name_env)
            .map_err(|_| anyhow::anyhow!("{} environment variable not set", config.cloud_name_env))?;
        if cloud_name.trim().is_empty() {
            anyhow::bail!("{} environment variable is empty", config.cloud_name_env);
        }
        Ok(Self::new(cloud_name, config.width))
    }

    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

impl ImageHost for CloudinaryHost {
    fn url(&self, image_id: &str) -> String {
        format!(
            "{}/{}/image/upload/q_auto/f_auto/c_scale,w_{}/{}",
            CLOUDINARY_BASE_URL, self.cloud_name, self.width, image_id
        )
    }
}
