//! Hero section editor for the landing page.

use tracing::{instrument, warn};

use velvetine_api::resources::{HeroContent, HERO_SECTION_KEY};
use velvetine_api::{ApiClient, ApiError};

/// State behind the hero section editor.
///
/// The section may not exist yet on a fresh deployment; loading treats a
/// 404 as "no section", and saving creates it on first write.
#[derive(Debug, Default)]
pub struct HeroSectionEditor {
    section_id: Option<String>,
    content: HeroContent,
    loading: bool,
    saving: bool,
}

impl HeroSectionEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn content(&self) -> &HeroContent {
        &self.content
    }

    #[must_use]
    pub fn content_mut(&mut self) -> &mut HeroContent {
        &mut self.content
    }

    /// Whether the section already exists server-side.
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.section_id.is_some()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    /// Load the hero section, leaving the editor empty when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason other than the
    /// section not existing.
    #[instrument(skip(self, client))]
    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.loading = true;
        let result = client.landing_section(HERO_SECTION_KEY).await;
        self.loading = false;

        match result {
            Ok(section) => {
                self.section_id = Some(section.id);
                self.content = serde_json::from_value(section.content)
                    .map_err(|err| ApiError::InvalidResponse(err.to_string()))?;
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                warn!("no hero section yet; starting empty");
                self.section_id = None;
                self.content = HeroContent::default();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Save the editor's content: update when the section exists, create it
    /// otherwise and remember the new id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, client))]
    pub async fn save(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        if self.saving {
            return Ok(());
        }
        self.saving = true;

        let result = match &self.section_id {
            Some(id) => {
                client
                    .update_landing_section(id, HERO_SECTION_KEY, &self.content)
                    .await
            }
            None => {
                client
                    .add_landing_section(HERO_SECTION_KEY, &self.content)
                    .await
            }
        };
        self.saving = false;

        let section = result?;
        self.section_id = Some(section.id);
        Ok(())
    }
}
