//! Character repository trait.

use super::filter::CharacterFilter;
use super::model::Character;
use crate::error::Result;
use crate::repository::Repository;

/// Repository over the character collection, with the public browser's search.
#[async_trait::async_trait]
pub trait CharacterRepository: Repository<Character> {
    /// Returns the characters matching `filter`, in storage order.
    async fn search(&self, filter: &CharacterFilter) -> Result<Vec<Character>> {
        let characters = self.list().await?;
        Ok(characters
            .into_iter()
            .filter(|character| filter.matches(character))
            .collect())
    }
}
