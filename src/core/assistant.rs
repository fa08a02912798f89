//! Campus Assistant
//!
//! The single entry point callers use: a raw question in, an answer out.
//! Classification picks a strategy; strategies that have nothing to say
//! hand over to the next one, ending in a fixed fallback sentence.

use std::sync::Arc;

use crate::core::data::DataRepository;
use crate::core::intent::{Intent, IntentClassifier};
use crate::core::matcher::match_department;
use crate::core::respond::{
    college_answer, conversation, find_information, format_department, format_keyword,
};

/// Answer when no strategy produced anything.
pub const FALLBACK: &str = "I'm not sure about that right now. Try asking about departments, HODs, facilities, placements or the college location — or check the college website at https://gcet.edu.in/ for official details.";

/// Answer when nothing matched and the campus dataset could not be loaded.
pub const CAMPUS_UNAVAILABLE: &str = "I'm sorry, but I'm having trouble accessing the campus information. Please try again later.";

/// Answers campus questions from a shared [`DataRepository`].
#[derive(Clone)]
pub struct Assistant {
    repository: Arc<DataRepository>,
}

impl Assistant {
    pub fn new(repository: Arc<DataRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &DataRepository {
        &self.repository
    }

    /// Answer one question. Never fails; data problems end in a fallback.
    pub async fn answer(&self, raw: &str) -> String {
        let query = raw.trim().to_lowercase();
        let repo = self.repository.as_ref();

        let departments = repo.list_departments().await;
        let result = IntentClassifier::new(&departments).classify(&query);
        log::debug!("Answering '{}' as {}", query, result.intent.as_str());

        match result.intent {
            Intent::Greeting => return conversation::greeting(&mut rand::thread_rng()).to_string(),
            Intent::Farewell => return conversation::farewell(&mut rand::thread_rng()).to_string(),
            Intent::Help => return conversation::help().to_string(),
            _ => {}
        }

        if result.intent.is_college_level() {
            if let Some(answer) = college_answer(repo, &query).await {
                return answer;
            }
        }

        if result.intent == Intent::HodQuery {
            if let Some(code) = result.department() {
                if repo.get_hod(code).await.is_some() {
                    let dept = repo.get_department(code).await;
                    return format_department(dept.as_ref(), "hod");
                }
            }
        }

        if result.intent == Intent::DepartmentQuery {
            if let Some(code) = result.department() {
                if let Some(dept) = repo.get_department(code).await {
                    return format_department(Some(&dept), "department");
                }
            }
        }

        let campus = repo.load_campus_dataset().await.ok();
        if let Some(campus) = &campus {
            if let Some((keyword, fragment)) = find_information(campus, &query) {
                return format_keyword(keyword, &fragment, &query);
            }
        }

        if query.contains("location") || query.contains("where") {
            if let Some(answer) = college_answer(repo, &query).await {
                return answer;
            }
        }

        if query.contains("hod") || query.contains("head of department") {
            if let Some(code) = match_department(&query, &departments) {
                if let Some(dept) = repo.get_department(&code).await {
                    return format_department(Some(&dept), "hod");
                }
            }
        }

        if campus.is_none() {
            return CAMPUS_UNAVAILABLE.to_string();
        }

        log::info!("No answer found for '{}'", query);
        FALLBACK.to_string()
    }
}
