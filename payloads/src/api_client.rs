use reqwest::StatusCode;
use serde::Serialize;

use crate::{BookId, requests, responses};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
///
/// All requests carry the session cookie; the backend decides what the
/// caller may see.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn register(
        &self,
        details: &requests::Register,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("auth/register", details).await?;
        ok_body(response).await
    }

    /// Verify the one-time code mailed during registration. Succeeding
    /// logs the user in.
    pub async fn verify_otp(
        &self,
        details: &requests::VerifyOtp,
    ) -> Result<responses::Authenticated, ClientError> {
        let response = self.post("auth/verify-otp", details).await?;
        ok_body(response).await
    }

    pub async fn login(
        &self,
        details: &requests::Login,
    ) -> Result<responses::Authenticated, ClientError> {
        let response = self.post("auth/login", details).await?;
        ok_body(response).await
    }

    pub async fn logout(
        &self,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.get("auth/logout").await?;
        ok_body(response).await
    }

    /// Get the currently authenticated user, if the session cookie is
    /// still good.
    pub async fn current_user(
        &self,
    ) -> Result<responses::CurrentUser, ClientError> {
        let response = self.get("auth/me").await?;
        ok_body(response).await
    }

    /// Request a password reset email for the given email address.
    pub async fn forgot_password(
        &self,
        details: &requests::ForgotPassword,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("auth/password/forgot", details).await?;
        ok_body(response).await
    }

    /// Reset password using a token from the password reset email.
    /// Succeeding logs the user in with the returned account.
    pub async fn reset_password(
        &self,
        token: &str,
        details: &requests::ResetPassword,
    ) -> Result<responses::Authenticated, ClientError> {
        let response = self
            .put(&format!("auth/password/reset/{token}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn update_password(
        &self,
        details: &requests::UpdatePassword,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.put("auth/password/update", details).await?;
        ok_body(response).await
    }

    pub async fn list_books(&self) -> Result<responses::Books, ClientError> {
        let response = self.get("book/all").await?;
        ok_body(response).await
    }

    /// Add a book to the library (admin only).
    pub async fn add_book(
        &self,
        details: &requests::AddBook,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("book/admin/add", details).await?;
        ok_body(response).await
    }

    /// Borrowals of the calling user.
    pub async fn my_borrowed_books(
        &self,
    ) -> Result<responses::BorrowedBooks, ClientError> {
        let response = self.get("borrow/my-borrowed-books").await?;
        ok_body(response).await
    }

    /// Every user's borrowals (admin only).
    pub async fn borrowed_books_by_users(
        &self,
    ) -> Result<responses::BorrowedBooks, ClientError> {
        let response = self.get("borrow/borrowed-books-by-users").await?;
        ok_body(response).await
    }

    /// Record that the user identified by email took out a book
    /// (admin only).
    pub async fn record_borrow(
        &self,
        book_id: &BookId,
        details: &requests::BorrowBook,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self
            .post(&format!("borrow/record-borrow-book/{book_id}"), details)
            .await?;
        ok_body(response).await
    }

    /// Mark a borrowal returned (admin only).
    pub async fn return_borrowed_book(
        &self,
        book_id: &BookId,
        details: &requests::BorrowBook,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self
            .put(&format!("borrow/return-borrowed-book/{book_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn list_users(&self) -> Result<responses::Users, ClientError> {
        let response = self.get("user/all").await?;
        ok_body(response).await
    }

    /// Create another admin account (admin only). Multipart because of
    /// the avatar image.
    pub async fn add_new_admin(
        &self,
        details: &requests::AddNewAdmin,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let mut form = reqwest::multipart::Form::new()
            .text("name", details.name.clone())
            .text("email", details.email.clone())
            .text("password", details.password.clone());
        if let Some(avatar) = &details.avatar {
            form = form.part(
                "avatar",
                reqwest::multipart::Part::bytes(avatar.bytes.clone())
                    .file_name(avatar.file_name.clone()),
            );
        }
        let response = self.post_multipart("user/add/new-admin", form).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected the request. Carries the body's message field
    /// when the body parsed as one.
    #[error("{}", .message.as_deref().unwrap_or("request rejected"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The response body did not match the endpoint's schema.
    #[error("Unexpected response from the server.")]
    Schema(#[source] serde_json::Error),
}

impl ClientError {
    /// The server-supplied message, when there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Deserialize a successful response into the endpoint's schema, or
/// return an appropriate error. Error bodies are probed for `{message}`;
/// success bodies that fail the schema become `ClientError::Schema`
/// rather than undefined fields downstream.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        let message = serde_json::from_str::<responses::ErrorMessage>(&text)
            .map(|body| body.message)
            .ok();
        return Err(ClientError::Api { status, message });
    }
    serde_json::from_str(&text).map_err(ClientError::Schema)
}
