//! Console channel
//!
//! Text stand-in for the speech stack: agent lines go to stdout, utterances
//! are read one line at a time from stdin. EOF maps to channel closure.

use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

use crate::{ChannelError, UtteranceChannel};

/// stdin/stdout utterance channel
pub struct ConsoleChannel {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl ConsoleChannel {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
            stdout: io::stdout(),
        }
    }
}

impl Default for ConsoleChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UtteranceChannel for ConsoleChannel {
    async fn say(&mut self, text: &str) -> Result<(), ChannelError> {
        self.stdout.write_all(b"Riya: ").await?;
        self.stdout.write_all(text.as_bytes()).await?;
        self.stdout.write_all(b"\n> ").await?;
        self.stdout.flush().await?;
        Ok(())
    }

    async fn listen(&mut self) -> Result<String, ChannelError> {
        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => {
                tracing::debug!("stdin reached EOF, treating as hang-up");
                Err(ChannelError::Closed)
            }
        }
    }
}
