//! Branching-dialogue session engine.
//!
//! Loads scenarios, lines, choices and sessions through the repositories and
//! applies the rules in [`petchat_core::adv_chat`]. Held in
//! [`AppState`](crate::state::AppState) as an `Arc<DialogueEngine>`.

use std::collections::HashMap;

use petchat_core::adv_chat::{ensure_choice_applies, is_end_of_scenario, lowest_order_line};
use petchat_core::error::CoreError;
use petchat_core::types::DbId;
use petchat_db::models::adv_character::AdvCharacter;
use petchat_db::models::adv_dialogue::{Choice, DialogueLine, DialogueLineDetail};
use petchat_db::models::adv_scenario::{AdvScenario, AdvScenarioDetail};
use petchat_db::models::adv_session::{ChatSession, ChatState};
use petchat_db::repositories::{
    AdvCharacterRepo, AdvScenarioRepo, ChatSessionRepo, ChoiceRepo, DialogueLineRepo,
};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Drives chat sessions through a scenario's dialogue graph.
///
/// A session is "at line X of scenario S". Starting a session places it on
/// the scenario's first line; each valid choice moves it along one edge.
/// A line with no outgoing choices is terminal.
pub struct DialogueEngine {
    pool: PgPool,
}

impl DialogueEngine {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Current snapshot of a session.
    ///
    /// Read-only: repeated calls return the same state until a choice is made.
    pub async fn get_current_chat_state(&self, session_id: DbId) -> AppResult<ChatState> {
        let session = ChatSessionRepo::find_by_id(&self.pool, session_id)
            .await?
            .ok_or(AppError::not_found("ChatSession", session_id))?;
        self.build_state(&session).await
    }

    /// Create a session positioned on the scenario's first line.
    pub async fn start_new_session(&self, scenario_id: DbId) -> AppResult<ChatState> {
        let scenario = AdvScenarioRepo::find_by_id(&self.pool, scenario_id)
            .await?
            .ok_or(AppError::not_found("Scenario", scenario_id))?;

        let first_line_id = self.resolve_first_line(&scenario).await?;
        let session = ChatSessionRepo::create(&self.pool, scenario.id, first_line_id).await?;

        tracing::info!(
            session_id = session.id,
            scenario_id = scenario.id,
            dialogue_line_id = first_line_id,
            "Chat session started"
        );

        self.build_state(&session).await
    }

    /// Take `choice_id` from the session's current line.
    ///
    /// The choice must start at the line the session currently points at;
    /// otherwise the session is left untouched and `InvalidState` is returned.
    pub async fn process_choice(&self, session_id: DbId, choice_id: DbId) -> AppResult<ChatState> {
        let session = ChatSessionRepo::find_by_id(&self.pool, session_id)
            .await?
            .ok_or(AppError::not_found("ChatSession", session_id))?;

        let choice = ChoiceRepo::find_by_id(&self.pool, choice_id)
            .await?
            .ok_or(AppError::not_found("Choice", choice_id))?;

        if let Err(e) = ensure_choice_applies(
            session.current_dialogue_line_id,
            choice.id,
            choice.source_dialogue_line_id,
        ) {
            tracing::warn!(
                session_id,
                choice_id,
                current_dialogue_line_id = session.current_dialogue_line_id,
                "Rejected choice for current state"
            );
            return Err(e.into());
        }

        let target = DialogueLineRepo::find_by_id(&self.pool, choice.next_dialogue_line_id)
            .await?
            .ok_or(AppError::not_found(
                "DialogueLine",
                choice.next_dialogue_line_id,
            ))?;

        let advanced = ChatSessionRepo::advance(
            &self.pool,
            session.id,
            session.current_dialogue_line_id,
            target.id,
        )
        .await?
        .ok_or_else(|| {
            // Another request moved the session between our read and write.
            AppError::Core(CoreError::InvalidState(format!(
                "Session {session_id} moved on before choice {choice_id} was applied"
            )))
        })?;

        tracing::debug!(
            session_id,
            choice_id,
            from = session.current_dialogue_line_id,
            to = target.id,
            "Chat session advanced"
        );

        self.build_state(&advanced).await
    }

    /// One line with its character and outgoing choices.
    pub async fn line_detail(&self, line: DialogueLine) -> AppResult<DialogueLineDetail> {
        let character = match line.character_id {
            Some(id) => AdvCharacterRepo::find_by_id(&self.pool, id).await?,
            None => None,
        };
        let choices_offered = ChoiceRepo::list_by_source(&self.pool, line.id).await?;
        Ok(DialogueLineDetail {
            line,
            character,
            choices_offered,
        })
    }

    /// A scenario with every line, character and choice, in line order.
    ///
    /// Uses three queries regardless of scenario size.
    pub async fn scenario_detail(&self, scenario_id: DbId) -> AppResult<AdvScenarioDetail> {
        let scenario = AdvScenarioRepo::find_by_id(&self.pool, scenario_id)
            .await?
            .ok_or(AppError::not_found("Scenario", scenario_id))?;

        let lines = DialogueLineRepo::list_by_scenario(&self.pool, scenario.id).await?;

        let mut character_ids: Vec<DbId> = lines.iter().filter_map(|l| l.character_id).collect();
        character_ids.sort_unstable();
        character_ids.dedup();
        let characters: HashMap<DbId, AdvCharacter> =
            AdvCharacterRepo::list_by_ids(&self.pool, &character_ids)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        let line_ids: Vec<DbId> = lines.iter().map(|l| l.id).collect();
        let mut choices: HashMap<DbId, Vec<Choice>> = HashMap::new();
        for choice in ChoiceRepo::list_by_sources(&self.pool, &line_ids).await? {
            choices
                .entry(choice.source_dialogue_line_id)
                .or_default()
                .push(choice);
        }

        let dialogue_lines = lines
            .into_iter()
            .map(|line| DialogueLineDetail {
                character: line
                    .character_id
                    .and_then(|id| characters.get(&id).cloned()),
                choices_offered: choices.remove(&line.id).unwrap_or_default(),
                line,
            })
            .collect();

        Ok(AdvScenarioDetail {
            scenario,
            dialogue_lines,
        })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// The explicit first line when it still resolves inside this scenario,
    /// otherwise the lowest-`order` line.
    async fn resolve_first_line(&self, scenario: &AdvScenario) -> AppResult<DbId> {
        if let Some(line_id) = scenario.first_dialogue_line_id {
            match DialogueLineRepo::find_by_id(&self.pool, line_id).await? {
                Some(line) if line.scenario_id == scenario.id => return Ok(line.id),
                _ => tracing::warn!(
                    scenario_id = scenario.id,
                    first_dialogue_line_id = line_id,
                    "Designated first line does not resolve, using lowest order"
                ),
            }
        }

        let keys = DialogueLineRepo::list_order_keys(&self.pool, scenario.id).await?;
        lowest_order_line(keys).ok_or(AppError::not_found(
            "First dialogue line of scenario",
            scenario.id,
        ))
    }

    async fn build_state(&self, session: &ChatSession) -> AppResult<ChatState> {
        let line = DialogueLineRepo::find_by_id(&self.pool, session.current_dialogue_line_id)
            .await?
            .ok_or(AppError::not_found(
                "DialogueLine",
                session.current_dialogue_line_id,
            ))?;

        let scenario = AdvScenarioRepo::find_by_id(&self.pool, session.scenario_id)
            .await?
            .ok_or(AppError::not_found("Scenario", session.scenario_id))?;

        let current_dialogue = self.line_detail(line).await?;
        let is_end = is_end_of_scenario(current_dialogue.choices_offered.len());

        Ok(ChatState {
            session_id: session.id,
            current_dialogue,
            scenario_name: scenario.name,
            is_end_of_scenario: is_end,
        })
    }
}
