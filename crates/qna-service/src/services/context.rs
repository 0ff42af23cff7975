//! Service context - dependency container for services
//!
//! Holds all repositories and shared services needed by the service layer.

use std::sync::Arc;

use qna_common::auth::JwtService;
use qna_core::traits::{
    AnswerRepository, BookmarkRepository, CategoryRepository, QuestionRepository,
    ReactionRepository, UserRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - OAuth2 redirect target for the login flow
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    question_repo: Arc<dyn QuestionRepository>,
    answer_repo: Arc<dyn AnswerRepository>,
    bookmark_repo: Arc<dyn BookmarkRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    category_repo: Arc<dyn CategoryRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    // Frontend URL receiving tokens after a successful login
    oauth2_redirect_uri: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        question_repo: Arc<dyn QuestionRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
        bookmark_repo: Arc<dyn BookmarkRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        jwt_service: Arc<JwtService>,
        oauth2_redirect_uri: String,
    ) -> Self {
        Self {
            user_repo,
            question_repo,
            answer_repo,
            bookmark_repo,
            reaction_repo,
            category_repo,
            jwt_service,
            oauth2_redirect_uri,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the question repository
    pub fn question_repo(&self) -> &dyn QuestionRepository {
        self.question_repo.as_ref()
    }

    /// Get the answer repository
    pub fn answer_repo(&self) -> &dyn AnswerRepository {
        self.answer_repo.as_ref()
    }

    /// Get the bookmark repository
    pub fn bookmark_repo(&self) -> &dyn BookmarkRepository {
        self.bookmark_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the OAuth2 redirect URI
    pub fn oauth2_redirect_uri(&self) -> &str {
        &self.oauth2_redirect_uri
    }
}
