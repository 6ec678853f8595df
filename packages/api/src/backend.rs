//! # Accounting backend client
//!
//! [`Backend`] is the set of calls the dashboard makes against the accounting
//! backend. [`HttpBackend`] implements it with `reqwest`; tests substitute an
//! in-memory fake.
//!
//! ## Endpoints
//!
//! | Method | Request | Response |
//! |--------|---------|----------|
//! | [`upload_receipt`](Backend::upload_receipt) | `POST /receipts/upload?customer_id={id}` (multipart field `file`) | [`Receipt`] |
//! | [`list_receipts`](Backend::list_receipts) | `GET /receipts?customer_id={id}` | `[Receipt]` |
//! | [`list_open_items`](Backend::list_open_items) | `GET /open-items?customer_id={id}` | `[OpenItem]` |
//! | [`list_ustva`](Backend::list_ustva) | `GET /ustva/{id}` | `[UstvaEntry]` |
//! | [`list_customers`](Backend::list_customers) | `GET /customers` | `[Customer]` |
//! | [`create_customer`](Backend::create_customer) | `POST /customers` | [`Customer`] |
//!
//! Every request carries the session's bearer token. HTTP 401 maps to
//! [`ApiError::Unauthorized`], any other non-2xx status to
//! [`ApiError::Status`]. Nothing is retried.

use reqwest::{Client, Request, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use store::{Customer, NewCustomer, OpenItem, Receipt, Session, UstvaEntry};

use crate::error::ApiError;

/// A file picked for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptFile {
    pub name: String,
    /// MIME type reported by the picker, if any.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ReceiptFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Async trait for the accounting backend API.
pub trait Backend {
    fn upload_receipt(
        &self,
        session: &Session,
        customer_id: i64,
        file: ReceiptFile,
    ) -> impl std::future::Future<Output = Result<Receipt, ApiError>>;
    fn list_receipts(
        &self,
        session: &Session,
        customer_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Receipt>, ApiError>>;
    fn list_open_items(
        &self,
        session: &Session,
        customer_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<OpenItem>, ApiError>>;
    fn list_ustva(
        &self,
        session: &Session,
        customer_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<UstvaEntry>, ApiError>>;
    fn list_customers(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<Vec<Customer>, ApiError>>;
    fn create_customer(
        &self,
        session: &Session,
        customer: &NewCustomer,
    ) -> impl std::future::Future<Output = Result<Customer, ApiError>>;
}

/// Upload a receipt on behalf of the session's own customer.
pub async fn upload_for_session<B: Backend>(
    backend: &B,
    session: &Session,
    file: ReceiptFile,
) -> Result<Receipt, ApiError> {
    if file.is_empty() {
        return Err(ApiError::EmptyFile);
    }
    let customer_id = session.customer_id().ok_or(ApiError::NoCustomer)?;
    tracing::info!("Uploading {} ({} bytes) for customer {}", file.name, file.size(), customer_id);
    backend.upload_receipt(session, customer_id, file).await
}

/// Find the backend customer for `email`, creating it when missing.
pub async fn find_or_create_customer<B: Backend>(
    backend: &B,
    session: &Session,
    email: &str,
) -> Result<Customer, ApiError> {
    let customers = backend.list_customers(session).await?;
    if let Some(existing) = customers
        .into_iter()
        .find(|c| c.email.eq_ignore_ascii_case(email))
    {
        return Ok(existing);
    }
    tracing::info!("Creating backend customer for {}", email);
    backend
        .create_customer(session, &NewCustomer::for_email(email))
        .await
}

/// Multipart field the backend reads the uploaded document from.
pub const UPLOAD_FIELD: &str = "file";

/// reqwest-backed [`Backend`].
///
/// Each call is split into a `*_request` builder returning the finished
/// [`Request`] and [`execute`](HttpBackend::execute), so the wire shape can be
/// checked without a server.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token and finish the request.
    fn authorized(&self, builder: RequestBuilder, session: &Session) -> Result<Request, ApiError> {
        Ok(builder
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .build()?)
    }

    pub fn upload_request(
        &self,
        session: &Session,
        customer_id: i64,
        file: ReceiptFile,
    ) -> Result<Request, ApiError> {
        let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.name);
        if let Some(mime) = file.content_type.as_deref() {
            part = part.mime_str(mime)?;
        }
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let builder = self
            .client
            .post(self.endpoint("/receipts/upload"))
            .query(&[("customer_id", customer_id)])
            .multipart(form);
        self.authorized(builder, session)
    }

    pub fn receipts_request(&self, session: &Session, customer_id: i64) -> Result<Request, ApiError> {
        let builder = self
            .client
            .get(self.endpoint("/receipts"))
            .query(&[("customer_id", customer_id)]);
        self.authorized(builder, session)
    }

    pub fn open_items_request(&self, session: &Session, customer_id: i64) -> Result<Request, ApiError> {
        let builder = self
            .client
            .get(self.endpoint("/open-items"))
            .query(&[("customer_id", customer_id)]);
        self.authorized(builder, session)
    }

    pub fn ustva_request(&self, session: &Session, customer_id: i64) -> Result<Request, ApiError> {
        let builder = self.client.get(self.endpoint(&format!("/ustva/{customer_id}")));
        self.authorized(builder, session)
    }

    pub fn customers_request(&self, session: &Session) -> Result<Request, ApiError> {
        self.authorized(self.client.get(self.endpoint("/customers")), session)
    }

    pub fn create_customer_request(
        &self,
        session: &Session,
        customer: &NewCustomer,
    ) -> Result<Request, ApiError> {
        let builder = self.client.post(self.endpoint("/customers")).json(customer);
        self.authorized(builder, session)
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = self.client.execute(request).await?;
        check_status(response.status())?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Backend for HttpBackend {
    async fn upload_receipt(
        &self,
        session: &Session,
        customer_id: i64,
        file: ReceiptFile,
    ) -> Result<Receipt, ApiError> {
        let request = self.upload_request(session, customer_id, file)?;
        self.execute(request).await
    }

    async fn list_receipts(&self, session: &Session, customer_id: i64) -> Result<Vec<Receipt>, ApiError> {
        let request = self.receipts_request(session, customer_id)?;
        self.execute(request).await
    }

    async fn list_open_items(&self, session: &Session, customer_id: i64) -> Result<Vec<OpenItem>, ApiError> {
        let request = self.open_items_request(session, customer_id)?;
        self.execute(request).await
    }

    async fn list_ustva(&self, session: &Session, customer_id: i64) -> Result<Vec<UstvaEntry>, ApiError> {
        let request = self.ustva_request(session, customer_id)?;
        self.execute(request).await
    }

    async fn list_customers(&self, session: &Session) -> Result<Vec<Customer>, ApiError> {
        let request = self.customers_request(session)?;
        self.execute(request).await
    }

    async fn create_customer(&self, session: &Session, customer: &NewCustomer) -> Result<Customer, ApiError> {
        let request = self.create_customer_request(session, customer)?;
        self.execute(request).await
    }
}

/// Map a response status onto the error taxonomy.
fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        Err(ApiError::Unauthorized)
    } else if !status.is_success() {
        Err(ApiError::Status(status.as_u16()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use reqwest::Method;
    use std::cell::RefCell;
    use std::rc::Rc;
    use store::Account;

    /// In-memory backend recording every call.
    #[derive(Clone, Default)]
    pub(crate) struct FakeBackend {
        pub customers: Rc<RefCell<Vec<Customer>>>,
        pub uploads: Rc<RefCell<Vec<(i64, String)>>>,
        pub calls: Rc<RefCell<usize>>,
        pub unauthorized: bool,
    }

    impl FakeBackend {
        fn hit(&self) -> Result<(), ApiError> {
            *self.calls.borrow_mut() += 1;
            if self.unauthorized {
                Err(ApiError::Unauthorized)
            } else {
                Ok(())
            }
        }
    }

    impl Backend for FakeBackend {
        async fn upload_receipt(&self, _s: &Session, customer_id: i64, file: ReceiptFile) -> Result<Receipt, ApiError> {
            self.hit()?;
            self.uploads.borrow_mut().push((customer_id, file.name.clone()));
            let id = self.uploads.borrow().len() as i64;
            Ok(Receipt {
                id,
                date: None,
                supplier: Some(file.name),
                net_amount: None,
                tax_amount: None,
                gross_amount: None,
                customer_id: Some(customer_id),
                file_path: None,
                uploaded_at: None,
            })
        }

        async fn list_receipts(&self, _s: &Session, _c: i64) -> Result<Vec<Receipt>, ApiError> {
            self.hit()?;
            Ok(Vec::new())
        }

        async fn list_open_items(&self, _s: &Session, _c: i64) -> Result<Vec<OpenItem>, ApiError> {
            self.hit()?;
            Ok(Vec::new())
        }

        async fn list_ustva(&self, _s: &Session, _c: i64) -> Result<Vec<UstvaEntry>, ApiError> {
            self.hit()?;
            Ok(Vec::new())
        }

        async fn list_customers(&self, _s: &Session) -> Result<Vec<Customer>, ApiError> {
            self.hit()?;
            Ok(self.customers.borrow().clone())
        }

        async fn create_customer(&self, _s: &Session, customer: &NewCustomer) -> Result<Customer, ApiError> {
            self.hit()?;
            let created = Customer {
                id: self.customers.borrow().len() as i64 + 1,
                name: customer.name.clone(),
                email: customer.email.clone(),
                vat_id: None,
            };
            self.customers.borrow_mut().push(created.clone());
            Ok(created)
        }
    }

    fn linked_session(customer_id: i64) -> Session {
        Session::new("tok").with_account(Account::new("max@example.de", Some(customer_id)))
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let backend = HttpBackend::new("http://localhost:8000/");
        assert_eq!(backend.endpoint("/receipts/upload"), "http://localhost:8000/receipts/upload");
    }

    #[test]
    fn test_upload_request_shape() {
        let backend = HttpBackend::new("http://localhost:8000/");
        let file = ReceiptFile::new("rechnung.pdf", Some("application/pdf".to_string()), vec![1, 2, 3]);

        let request = backend.upload_request(&linked_session(42), 42, file).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/receipts/upload");
        assert_eq!(request.url().query(), Some("customer_id=42"));
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer tok");
        let content_type = request.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert_eq!(UPLOAD_FIELD, "file");
    }

    #[test]
    fn test_upload_request_rejects_bad_mime() {
        let backend = HttpBackend::new("http://localhost:8000");
        let file = ReceiptFile::new("x.pdf", Some("not a mime".to_string()), vec![1]);

        let err = backend.upload_request(&linked_session(1), 1, file).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_list_request_shapes() {
        let backend = HttpBackend::new("http://localhost:8000");
        let session = linked_session(7);

        let receipts = backend.receipts_request(&session, 7).unwrap();
        assert_eq!(receipts.method(), Method::GET);
        assert_eq!(receipts.url().as_str(), "http://localhost:8000/receipts?customer_id=7");
        assert_eq!(receipts.headers()[AUTHORIZATION], "Bearer tok");

        let open_items = backend.open_items_request(&session, 7).unwrap();
        assert_eq!(open_items.url().as_str(), "http://localhost:8000/open-items?customer_id=7");
        assert_eq!(open_items.headers()[AUTHORIZATION], "Bearer tok");

        let ustva = backend.ustva_request(&session, 7).unwrap();
        assert_eq!(ustva.url().as_str(), "http://localhost:8000/ustva/7");
        assert_eq!(ustva.url().query(), None);
        assert_eq!(ustva.headers()[AUTHORIZATION], "Bearer tok");
    }

    #[test]
    fn test_customer_request_shapes() {
        let backend = HttpBackend::new("http://localhost:8000");
        let session = Session::new("tok");

        let list = backend.customers_request(&session).unwrap();
        assert_eq!(list.method(), Method::GET);
        assert_eq!(list.url().as_str(), "http://localhost:8000/customers");
        assert_eq!(list.headers()[AUTHORIZATION], "Bearer tok");

        let create = backend
            .create_customer_request(&session, &NewCustomer::for_email("neu@example.de"))
            .unwrap();
        assert_eq!(create.method(), Method::POST);
        assert_eq!(create.url().path(), "/customers");
        assert_eq!(create.headers()[CONTENT_TYPE], "application/json");
        let body = create.body().and_then(|b| b.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json["email"], "neu@example.de");
        assert_eq!(json["name"], "neu");
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::CREATED).is_ok());
        assert!(matches!(check_status(StatusCode::UNAUTHORIZED), Err(ApiError::Unauthorized)));
        assert!(matches!(check_status(StatusCode::NOT_FOUND), Err(ApiError::Status(404))));
        assert!(matches!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Status(500))
        ));
    }

    #[tokio::test]
    async fn test_upload_uses_session_customer() {
        let backend = FakeBackend::default();
        let file = ReceiptFile::new("rechnung.pdf", Some("application/pdf".to_string()), vec![1, 2, 3]);

        let receipt = upload_for_session(&backend, &linked_session(42), file).await.unwrap();

        assert_eq!(receipt.customer_id, Some(42));
        assert_eq!(*backend.uploads.borrow(), vec![(42, "rechnung.pdf".to_string())]);
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file_without_request() {
        let backend = FakeBackend::default();
        let file = ReceiptFile::new("leer.pdf", None, Vec::new());

        let err = upload_for_session(&backend, &linked_session(1), file).await.unwrap_err();

        assert!(matches!(err, ApiError::EmptyFile));
        assert_eq!(*backend.calls.borrow(), 0);
    }

    #[tokio::test]
    async fn test_upload_requires_linked_customer() {
        let backend = FakeBackend::default();
        let file = ReceiptFile::new("a.pdf", None, vec![0]);

        let err = upload_for_session(&backend, &Session::new("tok"), file).await.unwrap_err();

        assert!(matches!(err, ApiError::NoCustomer));
        assert_eq!(*backend.calls.borrow(), 0);
    }

    #[tokio::test]
    async fn test_find_existing_customer_case_insensitive() {
        let backend = FakeBackend::default();
        backend.customers.borrow_mut().push(Customer {
            id: 7,
            name: "Max".to_string(),
            email: "Max@Example.de".to_string(),
            vat_id: None,
        });

        let customer = find_or_create_customer(&backend, &Session::new("t"), "max@example.de")
            .await
            .unwrap();

        assert_eq!(customer.id, 7);
        assert_eq!(backend.customers.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_create_missing_customer() {
        let backend = FakeBackend::default();

        let customer = find_or_create_customer(&backend, &Session::new("t"), "neu@example.de")
            .await
            .unwrap();

        assert_eq!(customer.id, 1);
        assert_eq!(customer.name, "neu");
        assert_eq!(backend.customers.borrow().len(), 1);
    }
}
