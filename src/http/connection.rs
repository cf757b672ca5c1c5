use tokio::net::TcpStream;

use crate::files::FileHandler;
use crate::http::parser::parse_request;
use crate::http::reader;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

pub struct Connection {
    stream: TcpStream,
    handler: FileHandler,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Handling(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, handler: FileHandler) -> Self {
        Self {
            stream,
            handler,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request/response exchange.
    ///
    /// HTTP/1.0 semantics: exactly one response per connection, success
    /// or failure, then the connection closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await {
                        Ok(Some(req)) => {
                            self.state = ConnectionState::Handling(req);
                        }
                        Ok(None) => {
                            // Malformed: no terminator, empty header, or a
                            // short request line.
                            let response = Response::header_only(StatusCode::BadRequest);
                            self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                        }
                        Err(e) => {
                            tracing::warn!("I/O failure while reading request: {}", e);
                            let response = Response::header_only(StatusCode::InternalServerError);
                            self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                        }
                    }
                }

                ConnectionState::Handling(req) => {
                    let response = self.handler.handle(req).await;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    // A failed write here is the double-fault case: the
                    // response is dropped and the connection force-closed.
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads and parses one request off the stream.
    ///
    /// Returns `None` for malformed requests. POST/PUT bodies are read
    /// to the declared Content-Length, or to end of stream when the
    /// header is absent.
    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let block = reader::read_header_block(&mut self.stream).await?;

        let mut request = match parse_request(&block) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Malformed request: {:?}", e);
                return Ok(None);
            }
        };

        if request.method.expects_body() {
            request.body = reader::read_body(&mut self.stream, request.content_length()).await?;
        }

        Ok(Some(request))
    }
}
