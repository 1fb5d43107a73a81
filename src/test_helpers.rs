//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::api::{RecipeClient, Transport};
use crate::error::{Error, Result};
use crate::model::Recipe;

/// Canned reply for one endpoint.
#[derive(Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
    Offline,
}

/// Transport that answers from a table keyed by endpoint and records calls.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, Reply>>,
    pub calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl MockTransport {
    pub fn with(self, endpoint: &str, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(endpoint.to_owned(), reply);
        self
    }

    pub fn json(self, endpoint: &str, body: serde_json::Value) -> Self {
        self.with(endpoint, Reply::Body(body.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String> {
        self.calls.lock().unwrap().push((
            endpoint.to_owned(),
            query.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
        ));
        match self.replies.lock().unwrap().get(endpoint).cloned() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(Error::HttpStatus { status, body: String::new() }),
            Some(Reply::Offline) | None => Err(Error::Network("connection refused".into())),
        }
    }
}

pub fn client(mock: Arc<MockTransport>) -> RecipeClient {
    RecipeClient::new(mock)
}

pub fn recipe(id: &str, name: &str) -> Recipe {
    Recipe::summary(id, name, format!("https://img.test/{id}.jpg"))
}

pub fn lookup_body(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "meals": [{
            "idMeal": id,
            "strMeal": name,
            "strCategory": "Dessert",
            "strMealThumb": format!("https://img.test/{id}.jpg"),
            "strInstructions": "Mix.\r\nBake.",
            "strIngredient1": "Flour",
            "strMeasure1": "1 cup",
        }]
    })
}
