use crate::placeholder::{FieldMap, Placeholder};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

/// The Ada/Grace/Acme field set used throughout the tests.
pub(crate) fn sample_fields() -> FieldMap {
    FieldMap::default()
        .with(Placeholder::Name, "Ada")
        .with(Placeholder::ManagerName, "Grace")
        .with(Placeholder::CompanyName, "Acme")
        .with(Placeholder::JobTitle, "Engineer")
        .with(Placeholder::Skills, "C++")
        .with(Placeholder::CompanyValues, "Integrity")
}

/// Write a script file into `dir` and return its path.
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// Write a template file into `dir`.
pub(crate) fn write_template(dir: &Path, name: &str, text: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(name), text).unwrap();
}

/// A request captured by [`serve_once`].
#[derive(Debug)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    /// Header value by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Accept a single HTTP connection, reply with `status` and `body`, and hand
/// back what the client sent.
///
/// Returns the server's base URL (`http://127.0.0.1:<port>`).
pub(crate) fn serve_once(
    status: u16,
    body: impl Into<Vec<u8>>,
) -> (String, JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let body: Vec<u8> = body.into();

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        let mut headers = HashMap::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
            }
        }

        let length = headers
            .get("content-length")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        let mut request_body = vec![0; length];
        reader.read_exact(&mut request_body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        )
        .unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();

        RecordedRequest {
            method,
            path,
            headers,
            body: String::from_utf8(request_body).unwrap(),
        }
    });

    (base_url, handle)
}
