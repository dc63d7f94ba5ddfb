//! A throwaway HTTP server that serves canned GraphQL replies
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;

/// A request, as received by the stub
pub struct ReceivedRequest {
    /// Request line and headers
    pub head: String,
    pub body: String,
}

impl ReceivedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim().to_string())
    }
}

/// Serve one connection per reply, in order, then stop.
///
/// Returns the endpoint URL, and a handle that yields the received requests once every reply has been sent
pub fn serve(replies: Vec<(u16, String)>) -> (String, JoinHandle<Vec<ReceivedRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/graphql", listener.local_addr().unwrap());

    let handle = std::thread::spawn(move || {
        let mut requests = Vec::new();
        for (status, body) in replies {
            let (mut stream, _) = listener.accept().unwrap();
            requests.push(read_request(&mut stream));

            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status, reason(status), body.len(), body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        requests
    });

    (url, handle)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Whatever",
    }
}

fn read_request(stream: &mut TcpStream) -> ReceivedRequest {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before the end of the headers");
        data.extend_from_slice(&chunk[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&data[..head_end]).to_string();
    let content_length = head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
        .map(|(_, value)| value.trim().parse::<usize>().unwrap())
        .unwrap_or(0);

    let body_start = head_end + 4;
    while data.len() < body_start + content_length {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before the end of the body");
        data.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&data[body_start..body_start + content_length]).to_string();

    ReceivedRequest { head, body }
}

/// The reply to a successful view lookup
pub fn view_reply(id: &str) -> (u16, String) {
    (200, format!(r#"{{ "data": {{ "customView": {{ "id": "{}", "name": "My view" }} }} }}"#, id))
}

/// The reply to a page request. `nodes` is a JSON array
pub fn issues_reply(nodes: &str, end_cursor: Option<&str>, has_next_page: bool) -> (u16, String) {
    let end_cursor = match end_cursor {
        Some(cursor) => format!("\"{}\"", cursor),
        None => "null".to_string(),
    };
    (200, format!(
        r#"{{ "data": {{ "customView": {{ "issues": {{ "nodes": {}, "pageInfo": {{ "hasNextPage": {}, "endCursor": {} }} }} }} }} }}"#,
        nodes, has_next_page, end_cursor
    ))
}

/// A JSON issue node
pub fn issue_json(identifier: &str, completed_at: Option<&str>) -> String {
    let completed_at = match completed_at {
        Some(date) => format!("\"{}\"", date),
        None => "null".to_string(),
    };
    format!(
        r#"{{ "identifier": "{0}", "title": "Title of {0}", "url": "https://linear.app/team/issue/{0}", "completedAt": {1} }}"#,
        identifier, completed_at
    )
}
