//! In-memory repository implementations for service tests
//!
//! One shared [`State`] backs all repositories so cross-entity effects
//! (counter updates, cascades) behave like the real store.

use std::ops::Deref;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use qna_common::auth::{JwtService, OAuth2UserProfile};
use qna_core::entities::{Answer, Bookmark, Category, Question, Reaction, User};
use qna_core::error::DomainError;
use qna_core::traits::{
    AnswerRepository, AnswerSelection, BookmarkRepository, CategoryRepository, NewAnswer, NewUser,
    Page, PageRequest, QuestionRepository, ReactionRepository, ReactionToggle, RepoResult,
    UserRepository,
};
use qna_core::value_objects::{AuthProvider, ReactionTarget};

use super::context::ServiceContext;

#[derive(Default)]
pub(crate) struct State {
    next_id: AtomicI64,
    users: Mutex<Vec<User>>,
    questions: Mutex<Vec<Question>>,
    answers: Mutex<Vec<Answer>>,
    bookmarks: Mutex<Vec<Bookmark>>,
    reactions: Mutex<Vec<Reaction>>,
    categories: Mutex<Vec<Category>>,
}

impl State {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

fn page_of<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len() as i64;
    let items = items
        .iter()
        .skip(usize::try_from(request.offset()).unwrap_or(0))
        .take(usize::try_from(request.size).unwrap_or(0))
        .cloned()
        .collect();
    Page {
        items,
        page: request.page,
        size: request.size,
        total,
    }
}

// ============================================================================
// Repositories
// ============================================================================

struct MemUserRepo(Arc<State>);

#[async_trait]
impl UserRepository for MemUserRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut users = self.0.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let created = User {
            id: self.0.next_id(),
            email: user.email.clone(),
            name: user.name.clone(),
            profile_image: user.profile_image.clone(),
            provider: user.provider,
            provider_id: user.provider_id.clone(),
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_profile(
        &self,
        id: i64,
        name: &str,
        profile_image: Option<&str>,
    ) -> RepoResult<User> {
        let mut users = self.0.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        user.apply_profile(name.to_string(), profile_image.map(String::from));
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        {
            let mut users = self.0.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id != id);
            if users.len() == before {
                return Err(DomainError::UserNotFound(id));
            }
        }

        // Mirror the real store: fix counters for the user's reactions,
        // then cascade away everything the user owns.
        let mut reactions = self.0.reactions.lock().unwrap();
        let mut questions = self.0.questions.lock().unwrap();
        let mut answers = self.0.answers.lock().unwrap();

        for reaction in reactions.iter().filter(|r| r.user_id == id) {
            match reaction.target {
                ReactionTarget::Question(qid) => {
                    if let Some(q) = questions.iter_mut().find(|q| q.id == qid) {
                        q.lgtm_count = (q.lgtm_count - 1).max(0);
                    }
                }
                ReactionTarget::Answer(aid) => {
                    if let Some(a) = answers.iter_mut().find(|a| a.id == aid) {
                        a.lgtm_count = (a.lgtm_count - 1).max(0);
                    }
                }
            }
        }

        reactions.retain(|r| r.user_id != id);
        let removed: Vec<i64> = answers
            .iter()
            .filter(|a| a.user_id == id)
            .map(|a| a.id)
            .collect();
        answers.retain(|a| a.user_id != id);
        reactions.retain(|r| match r.target {
            ReactionTarget::Answer(aid) => !removed.contains(&aid),
            ReactionTarget::Question(_) => true,
        });
        self.0.bookmarks.lock().unwrap().retain(|b| b.user_id != id);

        Ok(())
    }
}

struct MemQuestionRepo(Arc<State>);

#[async_trait]
impl QuestionRepository for MemQuestionRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Question>> {
        Ok(self
            .0
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> RepoResult<Page<Question>> {
        let mut items: Vec<Question> = self.0.questions.lock().unwrap().clone();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(page_of(&items, page))
    }

    async fn list_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<Question>> {
        let mut items: Vec<Question> = self
            .0
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category_id == Some(category_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(page_of(&items, page))
    }
}

struct MemAnswerRepo(Arc<State>);

#[async_trait]
impl AnswerRepository for MemAnswerRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Answer>> {
        Ok(self
            .0
            .answers
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_question(&self, question_id: i64) -> RepoResult<Vec<Answer>> {
        let mut items: Vec<Answer> = self
            .0
            .answers
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.is_selected
                .cmp(&a.is_selected)
                .then(b.lgtm_count.cmp(&a.lgtm_count))
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(items)
    }

    async fn find_selected(&self, question_id: i64) -> RepoResult<Option<Answer>> {
        Ok(self
            .0
            .answers
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.question_id == question_id && a.is_selected)
            .cloned())
    }

    async fn create(&self, answer: &NewAnswer) -> RepoResult<Answer> {
        let now = Utc::now();
        let created = Answer {
            id: self.0.next_id(),
            content: answer.content.clone(),
            question_id: answer.question_id,
            user_id: answer.user_id,
            is_anonymous: answer.is_anonymous,
            is_selected: false,
            lgtm_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.0.answers.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn select(&self, answer_id: i64) -> RepoResult<AnswerSelection> {
        let mut answers = self.0.answers.lock().unwrap();

        let (question_id, content) = answers
            .iter()
            .find(|a| a.id == answer_id)
            .map(|a| (a.question_id, a.content.clone()))
            .ok_or(DomainError::AnswerNotFound(answer_id))?;

        let previous = answers
            .iter_mut()
            .find(|a| a.question_id == question_id && a.is_selected && a.id != answer_id)
            .map(|a| {
                a.is_selected = false;
                a.id
            });

        if let Some(target) = answers.iter_mut().find(|a| a.id == answer_id) {
            target.is_selected = true;
        }

        if let Some(question) = self
            .0
            .questions
            .lock()
            .unwrap()
            .iter_mut()
            .find(|q| q.id == question_id)
        {
            question.default_answer = Some(content);
        }

        Ok(AnswerSelection {
            question_id,
            previous,
        })
    }
}

struct MemBookmarkRepo(Arc<State>);

#[async_trait]
impl BookmarkRepository for MemBookmarkRepo {
    async fn exists(&self, user_id: i64, question_id: i64) -> RepoResult<bool> {
        Ok(self
            .0
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .any(|b| b.user_id == user_id && b.question_id == question_id))
    }

    async fn toggle(&self, user_id: i64, question_id: i64) -> RepoResult<bool> {
        let mut bookmarks = self.0.bookmarks.lock().unwrap();
        let before = bookmarks.len();
        bookmarks.retain(|b| !(b.user_id == user_id && b.question_id == question_id));
        if bookmarks.len() < before {
            return Ok(false);
        }

        let now = Utc::now();
        bookmarks.push(Bookmark {
            id: self.0.next_id(),
            user_id,
            question_id,
            created_at: now,
            updated_at: now,
        });
        Ok(true)
    }

    async fn find_by_user(&self, user_id: i64, page: PageRequest) -> RepoResult<Page<Bookmark>> {
        let mut items: Vec<Bookmark> = self
            .0
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(&items, page))
    }

    async fn find_by_user_and_category(
        &self,
        user_id: i64,
        category_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<Bookmark>> {
        let questions = self.0.questions.lock().unwrap();
        let in_category: Vec<i64> = questions
            .iter()
            .filter(|q| q.category_id == Some(category_id))
            .map(|q| q.id)
            .collect();
        drop(questions);

        let mut items: Vec<Bookmark> = self
            .0
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id && in_category.contains(&b.question_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(&items, page))
    }
}

struct MemReactionRepo(Arc<State>);

impl MemReactionRepo {
    fn adjust_count(&self, target: ReactionTarget, delta: i32) -> RepoResult<i32> {
        match target {
            ReactionTarget::Question(id) => {
                let mut questions = self.0.questions.lock().unwrap();
                let question = questions
                    .iter_mut()
                    .find(|q| q.id == id)
                    .ok_or(DomainError::QuestionNotFound(id))?;
                question.lgtm_count = (question.lgtm_count + delta).max(0);
                Ok(question.lgtm_count)
            }
            ReactionTarget::Answer(id) => {
                let mut answers = self.0.answers.lock().unwrap();
                let answer = answers
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or(DomainError::AnswerNotFound(id))?;
                answer.lgtm_count = (answer.lgtm_count + delta).max(0);
                Ok(answer.lgtm_count)
            }
        }
    }
}

#[async_trait]
impl ReactionRepository for MemReactionRepo {
    async fn find(&self, user_id: i64, target: ReactionTarget) -> RepoResult<Option<Reaction>> {
        Ok(self
            .0
            .reactions
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.target == target)
            .cloned())
    }

    async fn exists(&self, user_id: i64, target: ReactionTarget) -> RepoResult<bool> {
        Ok(self.find(user_id, target).await?.is_some())
    }

    async fn toggle(&self, user_id: i64, target: ReactionTarget) -> RepoResult<ReactionToggle> {
        let removed = {
            let mut reactions = self.0.reactions.lock().unwrap();
            let before = reactions.len();
            reactions.retain(|r| !(r.user_id == user_id && r.target == target));
            reactions.len() < before
        };

        if removed {
            let lgtm_count = self.adjust_count(target, -1)?;
            return Ok(ReactionToggle {
                active: false,
                lgtm_count,
            });
        }

        let lgtm_count = self.adjust_count(target, 1)?;
        let now = Utc::now();
        self.0.reactions.lock().unwrap().push(Reaction {
            id: self.0.next_id(),
            user_id,
            target,
            created_at: now,
            updated_at: now,
        });

        Ok(ReactionToggle {
            active: true,
            lgtm_count,
        })
    }

    async fn count(&self, target: ReactionTarget) -> RepoResult<i64> {
        Ok(self
            .0
            .reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.target == target)
            .count() as i64)
    }
}

struct MemCategoryRepo(Arc<State>);

#[async_trait]
impl CategoryRepository for MemCategoryRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        Ok(self
            .0
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

// ============================================================================
// Test harness
// ============================================================================

/// A [`ServiceContext`] over in-memory repositories, with direct access to
/// the backing state for seeding
pub(crate) struct TestCtx {
    ctx: ServiceContext,
    state: Arc<State>,
}

impl Deref for TestCtx {
    type Target = ServiceContext;

    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

pub(crate) fn test_context() -> TestCtx {
    let state = Arc::new(State::default());
    let ctx = ServiceContext::new(
        Arc::new(MemUserRepo(Arc::clone(&state))),
        Arc::new(MemQuestionRepo(Arc::clone(&state))),
        Arc::new(MemAnswerRepo(Arc::clone(&state))),
        Arc::new(MemBookmarkRepo(Arc::clone(&state))),
        Arc::new(MemReactionRepo(Arc::clone(&state))),
        Arc::new(MemCategoryRepo(Arc::clone(&state))),
        Arc::new(JwtService::new(
            "test-secret-key-that-is-long-enough",
            3600,
            1_209_600,
        )),
        "http://localhost:3000/oauth2/redirect".to_string(),
    );
    TestCtx { ctx, state }
}

pub(crate) fn profile(provider: AuthProvider, email: &str) -> OAuth2UserProfile {
    OAuth2UserProfile {
        provider,
        provider_id: format!("{provider}-{email}"),
        name: "Dev".to_string(),
        email: email.to_string(),
        image_url: None,
    }
}

pub(crate) fn google_attributes(email: &str) -> Value {
    json!({
        "sub": format!("google-{email}"),
        "name": "Dev",
        "email": email,
        "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
    })
}

pub(crate) async fn seed_user(ctx: &TestCtx, email: &str) -> i64 {
    ctx.user_repo()
        .create(&NewUser {
            email: email.to_string(),
            name: "Dev".to_string(),
            profile_image: None,
            provider: AuthProvider::Google,
            provider_id: format!("google-{email}"),
            role: qna_core::value_objects::Role::User,
        })
        .await
        .unwrap()
        .id
}

pub(crate) async fn seed_question(ctx: &TestCtx, title: &str) -> i64 {
    let now = Utc::now();
    let id = ctx.state.next_id();
    ctx.state.questions.lock().unwrap().push(Question {
        id,
        title: title.to_string(),
        content: Some(format!("{title} (full prompt)")),
        default_answer: None,
        category_id: None,
        keyword_ids: Vec::new(),
        lgtm_count: 0,
        created_at: now,
        updated_at: now,
    });
    id
}

pub(crate) async fn seed_question_in_category(
    ctx: &TestCtx,
    title: &str,
    category: &str,
) -> (i64, i64) {
    let now = Utc::now();
    let category_id = {
        let mut categories = ctx.state.categories.lock().unwrap();
        if let Some(existing) = categories.iter().find(|c| c.name == category) {
            existing.id
        } else {
            let id = ctx.state.next_id();
            categories.push(Category {
                id,
                name: category.to_string(),
                created_at: now,
                updated_at: now,
            });
            id
        }
    };

    let question_id = seed_question(ctx, title).await;
    if let Some(question) = ctx
        .state
        .questions
        .lock()
        .unwrap()
        .iter_mut()
        .find(|q| q.id == question_id)
    {
        question.category_id = Some(category_id);
    }

    (category_id, question_id)
}
