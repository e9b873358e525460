use anyhow::{anyhow, Result};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared output sink all terminal views write to
#[derive(Clone)]
pub struct Console {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Console {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Arc::new(Mutex::new(writer)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Console writing into memory, with a handle to read back what was written
    pub fn capture() -> (Self, CapturedOutput) {
        let output = CapturedOutput::default();
        let console = Self::new(Box::new(CaptureWriter(output.0.clone())));
        (console, output)
    }

    /// Writes one rendered block followed by a newline
    pub fn print(&self, block: &str) -> Result<()> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| anyhow!("Console output lock poisoned"))?;
        writeln!(sink, "{}", block)?;
        sink.flush()?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "capture lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
