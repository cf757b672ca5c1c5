use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Raw header block pulled off a connection stream.
///
/// Holds everything up to (but not including) the final LF of the
/// CRLF-CRLF terminator.
#[derive(Debug)]
pub struct HeaderBlock {
    /// Accumulated header text
    pub text: String,
    /// False when the stream ended before the terminator was seen
    pub terminated: bool,
}

/// Reads bytes one at a time until the CRLF-CRLF terminator or end of
/// stream.
///
/// A terminator only counts when the immediately preceding line was a
/// bare CRLF. The newline flag is kept across a CR that directly follows
/// an LF, so the CR of the closing CRLF does not clear it, while a lone
/// LF-CR pair never satisfies the terminator.
///
/// An empty stream yields an empty, non-terminated block; the caller
/// must treat that as malformed rather than as a zero-length request.
pub async fn read_header_block<R>(stream: &mut R) -> std::io::Result<HeaderBlock>
where
    R: AsyncRead + Unpin,
{
    let mut text = String::new();
    let mut prev: u8 = 0;
    let mut newline = false;
    let mut byte = [0u8; 1];

    loop {
        if stream.read(&mut byte).await? == 0 {
            return Ok(HeaderBlock { text, terminated: false });
        }
        let cur = byte[0];

        if newline && prev == b'\r' && cur == b'\n' {
            return Ok(HeaderBlock { text, terminated: true });
        }

        if prev == b'\r' && cur == b'\n' {
            newline = true;
        } else if !(prev == b'\n' && cur == b'\r') {
            newline = false;
        }

        prev = cur;
        text.push(cur as char);
    }
}

/// Reads a request body off the stream after the header block.
///
/// With a declared length, exactly that many bytes are read and the peer
/// closing early is an I/O error. Without one, reads until end of
/// stream.
pub async fn read_body<R>(stream: &mut R, declared_len: Option<usize>) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    match declared_len {
        Some(0) => Ok(Vec::new()),
        Some(len) => {
            let mut buf = BytesMut::with_capacity(len);
            while buf.len() < len {
                let n = stream.read_buf(&mut buf).await?;
                if n == 0 {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "connection closed before complete body received",
                    ));
                }
            }
            buf.truncate(len);
            Ok(buf.to_vec())
        }
        None => {
            let mut buf = Vec::new();
            stream.read_to_end(&mut buf).await?;
            Ok(buf)
        }
    }
}
