//! Ledger session
//!
//! Owns exclusive access to one journal file for the duration of a run.
//! A `<file>.LCK` lock file is created on open and removed on `end()`;
//! `Drop` also removes it, so no exit path leaves a stale lock behind.
//! Mutations stay in memory until the single final `save()`.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use crate::book::Book;
use crate::error::LedgerError;
use crate::parser::parse;
use crate::writer::render;

pub struct Session {
    path: PathBuf,
    lock_path: PathBuf,
    book: Book,
    read_only: bool,
    ended: bool,
}

impl Session {
    /// Open the journal at `path`, acquiring its lock and parsing it
    pub fn open<P: AsRef<Path>>(path: P, read_only: bool) -> Result<Session, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let lock_path = lock_path_for(&path);

        match OpenOptions::new().write(true).create_new(true).open(&lock_path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(LedgerError::Locked {
                    path: lock_path.display().to_string(),
                });
            }
            Err(e) => return Err(LedgerError::IoError(e)),
        }

        // Lock is held from here on; release it if the read or parse fails
        let book = std::fs::read_to_string(&path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    LedgerError::FileNotFound {
                        path: path.display().to_string(),
                    }
                } else {
                    LedgerError::IoError(e)
                }
            })
            .and_then(|content| parse(&content));

        match book {
            Ok(book) => Ok(Session {
                path,
                lock_path,
                book,
                read_only,
                ended: false,
            }),
            Err(e) => {
                let _ = std::fs::remove_file(&lock_path);
                Err(e)
            }
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }

    /// Persist the in-memory book to the journal file in one write
    pub fn save(&mut self) -> Result<(), LedgerError> {
        if self.read_only {
            return Err(LedgerError::ReadOnly);
        }
        std::fs::write(&self.path, render(&self.book))?;
        log::debug!("Saved ledger to {}", self.path.display());
        Ok(())
    }

    /// Close the session and release the lock
    pub fn end(mut self) -> Result<(), LedgerError> {
        self.ended = true;
        std::fs::remove_file(&self.lock_path)?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.ended {
            let _ = std::fs::remove_file(&self.lock_path);
        }
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut os = path.to_path_buf().into_os_string();
    os.push(".LCK");
    PathBuf::from(os)
}

// ==================== Tests ====================
