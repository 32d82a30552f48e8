//! Trello API stubs and step helpers for board export BDD tests.

use std::str::FromStr;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::runtime::SharedRuntime;

/// Number of files written, parsed from step text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FileCount(usize);

impl FileCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for FileCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Turns the `\n` escapes used in feature files into newlines and strips
/// surrounding quotes.
pub(crate) fn unescape(text: &str) -> String {
    text.trim_matches('"').replace("\\n", "\n")
}

fn get_json(runtime: &SharedRuntime, server: &MockServer, route: &str, body: Value) {
    let mock = Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body));
    runtime.block_on(mock.mount(server));
}

fn comment(id: &str, author: &str, text: &str) -> Value {
    json!({
        "id": id,
        "type": "commentCard",
        "memberCreator": { "fullName": author, "username": author.to_lowercase() },
        "data": { "text": text }
    })
}

/// Serves `board_name` with a "To-Do" list of two cards and a "Doing" list of
/// one card, next to an unrelated "Archive" board.
pub(crate) fn mount_sprint_board(runtime: &SharedRuntime, server: &MockServer, board_name: &str) {
    get_json(
        runtime,
        server,
        "/1/members/me/boards",
        json!([
            { "id": "board-1", "name": board_name },
            { "id": "board-2", "name": "Archive" }
        ]),
    );
    get_json(
        runtime,
        server,
        "/1/boards/board-1/lists",
        json!([
            { "id": "list-todo", "name": "To-Do" },
            { "id": "list-doing", "name": "Doing" }
        ]),
    );
    get_json(
        runtime,
        server,
        "/1/lists/list-todo/cards",
        json!([
            { "id": "card-1", "name": "Fix bug", "desc": "desc A" },
            { "id": "card-2", "name": "Write docs", "desc": "" }
        ]),
    );
    get_json(
        runtime,
        server,
        "/1/lists/list-doing/cards",
        json!([
            { "id": "card-3", "name": "Review PR", "desc": "needs two approvals" }
        ]),
    );
    // Trello returns comments newest first.
    get_json(
        runtime,
        server,
        "/1/cards/card-1/actions",
        json!([
            comment("action-2", "Bob", "thanks"),
            comment("action-1", "Alice", "on it")
        ]),
    );
    get_json(runtime, server, "/1/cards/card-2/actions", json!([]));
    get_json(runtime, server, "/1/cards/card-3/actions", json!([]));
}

/// Makes the board listing answer 401, overriding the stubbed boards.
pub(crate) fn mount_rejected_credentials(runtime: &SharedRuntime, server: &MockServer) {
    let mock = Mock::given(method("GET"))
        .and(path("/1/members/me/boards"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .with_priority(1);
    runtime.block_on(mock.mount(server));
}
