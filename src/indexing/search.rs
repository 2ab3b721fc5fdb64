//! Flattening of the question/expansion tree into search entries.

use crate::types::{Catechism, EntryKind, SearchEntry};

/// Page URL of a question.
pub fn question_url(number: u32) -> String {
    format!("/pregunta/{}.html", number)
}

/// Anchor URL of an expansion group on its question page.
pub fn group_url(number: u32, group_index: usize) -> String {
    format!("/pregunta/{}.html#grupo-{}", number, group_index)
}

/// Build the search index in corpus traversal order.
///
/// Each question contributes its own entry followed by one entry per
/// subitem, group by group. Nothing is dropped or merged, so the index
/// always holds `total_questions + total_subquestions` entries.
pub fn build_search_index(catechism: &Catechism) -> Vec<SearchEntry> {
    let mut index = Vec::with_capacity(catechism.questions.len() + catechism.subitem_count());

    for question in &catechism.questions {
        index.push(SearchEntry {
            number: question.number,
            kind: EntryKind::Question,
            question: question.question.clone(),
            answer: question.full_answer.clone(),
            verse: None,
            reference: None,
            url: question_url(question.number),
        });

        for (group_index, group) in question.numbered_groups() {
            let url = group_url(question.number, group_index);
            for item in &group.items {
                index.push(SearchEntry {
                    number: question.number,
                    kind: EntryKind::Beddome,
                    question: item.question.clone(),
                    answer: item.answer.clone(),
                    verse: Some(item.verse.clone()),
                    reference: Some(item.reference.clone()),
                    url: url.clone(),
                });
            }
        }
    }

    index
}
