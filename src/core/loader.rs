use crate::core::generator::{generate_code, pick_program};
use crate::domain::model::{ProgramCatalog, StudentCard, CARD_ELEMENT_IDS};
use crate::domain::ports::{Document, ProfileSource, RandomSource};
use crate::utils::error::{CardError, Result};
use chrono::Utc;

/// Fetches one profile, derives the card values and renders them into a document.
pub struct CardLoader<S: ProfileSource, R: RandomSource> {
    source: S,
    rng: R,
    catalog: ProgramCatalog,
}

impl<S: ProfileSource, R: RandomSource> CardLoader<S, R> {
    pub fn new(source: S, rng: R) -> Self {
        Self {
            source,
            rng,
            catalog: ProgramCatalog::standard(),
        }
    }

    /// Fetch stage. Random draws only happen once a profile has arrived.
    pub async fn load_card(&mut self) -> Result<StudentCard> {
        let profile = self.source.fetch_profile().await?;
        tracing::debug!("Fetched profile for {} {}", profile.first_name, profile.last_name);

        let program = pick_program(&self.catalog, &mut self.rng);
        let code = generate_code(&mut self.rng);

        Ok(StudentCard {
            full_name: profile.full_name(),
            program: program.to_string(),
            code: code.to_string(),
            issued_at: Utc::now(),
        })
    }

    /// Render stage: the single handler for both outcomes of [`load_card`](Self::load_card).
    ///
    /// On failure exactly one error record is logged and the document is left untouched.
    pub fn handle_outcome<D: Document + ?Sized>(
        outcome: Result<StudentCard>,
        document: &mut D,
    ) -> Result<StudentCard> {
        let card = match outcome {
            Ok(card) => card,
            Err(e) => {
                tracing::error!(error = ?e, "Error fetching profile data: {}", e);
                return Err(e);
            }
        };

        // 先確認三個元素都存在，避免只寫入一部分
        if let Some(missing) = CARD_ELEMENT_IDS.iter().find(|id| !document.has_element(id)) {
            let e = CardError::MissingElement {
                id: missing.to_string(),
            };
            tracing::error!(error = ?e, "Cannot render student card: {}", e);
            return Err(e);
        }

        for (id, text) in card.text_updates() {
            document.set_text_content(id, text);
        }

        tracing::info!("Rendered student card {} for {}", card.code, card.full_name);
        tracing::debug!("QR slot ready for code {}", card.code);
        Ok(card)
    }

    pub async fn run<D: Document + ?Sized>(&mut self, document: &mut D) -> Result<StudentCard> {
        let outcome = self.load_card().await;
        Self::handle_outcome(outcome, document)
    }
}
