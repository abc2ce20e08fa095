//! Translation merge and display ordering shared by categories,
//! subcategories and products.

use std::collections::HashMap;

use uuid::Uuid;

use crate::shared::i18n::Locale;

/// A base row that can be localized
pub trait MenuRow {
    fn id(&self) -> Uuid;
    fn is_active(&self) -> bool;
}

/// A per-language translation row pointing at its base row
pub trait TranslationRow {
    fn owner_id(&self) -> Uuid;
    fn language_code(&self) -> &str;
}

pub trait Localize: MenuRow + Sized {
    type Translation: TranslationRow;
    type Output;

    /// Combine the row with its matching translation (if any). Missing
    /// translations fall back to the slug for the name and to `None` for the
    /// free-text fields.
    fn localize(self, translation: Option<&Self::Translation>, locale: Locale) -> Self::Output;
}

pub trait DisplayOrdered {
    fn display_order(&self) -> Option<i32>;
}

/// Localize every active row, keeping the input order.
///
/// Translations may span several languages; only those matching `locale` are
/// considered. If several rows match the same entity, the first one in
/// `translations` wins.
pub fn merge_translations<B: Localize>(
    rows: Vec<B>,
    translations: &[B::Translation],
    locale: Locale,
) -> Vec<B::Output> {
    let mut by_owner: HashMap<Uuid, Vec<&B::Translation>> = HashMap::new();
    for translation in translations {
        by_owner
            .entry(translation.owner_id())
            .or_default()
            .push(translation);
    }

    rows.into_iter()
        .filter(|row| row.is_active())
        .map(|row| {
            let translation = by_owner.get(&row.id()).and_then(|candidates| {
                candidates
                    .iter()
                    .copied()
                    .find(|t| t.language_code() == locale.code())
            });
            row.localize(translation, locale)
        })
        .collect()
}

/// Stable sort by display order, missing order counting as 0
pub fn sort_by_display_order<T: DisplayOrdered>(rows: &mut [T]) {
    rows.sort_by_key(|row| row.display_order().unwrap_or(0));
}

/// Merge, then sort for presentation
pub fn localize_sorted<B>(rows: Vec<B>, translations: &[B::Translation], locale: Locale) -> Vec<B::Output>
where
    B: Localize,
    B::Output: DisplayOrdered,
{
    let mut localized = merge_translations(rows, translations, locale);
    sort_by_display_order(&mut localized);
    localized
}
