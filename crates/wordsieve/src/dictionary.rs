//! Dictionary collaborator: line-oriented word sources
//!
//! The filter itself never performs I/O; this module is the seam where a
//! text source becomes a lazy sequence of words, one per line, trimmed of
//! line terminators. Every line is a word: no filtering, no length caps,
//! no escaping. Read failures surface to the caller; the filter correctly
//! reflects every word consumed before the failure.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::domain::{BloomFilter, HashStrategy};
use crate::error::FilterError;

/// Lazy line-oriented word source over any buffered reader.
pub struct DictionaryLoader<R> {
    reader: R,
}

impl DictionaryLoader<BufReader<File>> {
    /// Open a dictionary file, one word per line.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "dictionary opened");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> DictionaryLoader<R> {
    /// Wrap an already-open reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consume the loader, yielding one word per line.
    ///
    /// Line terminators (`\n`, `\r\n`) are stripped; everything else on
    /// the line is the word, however long.
    pub fn words(self) -> Words<R> {
        Words {
            lines: self.reader.lines(),
        }
    }
}

/// Iterator over the words of a dictionary source.
pub struct Words<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = Result<String, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

impl<S: HashStrategy> BloomFilter<S> {
    /// Bulk-insert every word a dictionary source produces.
    ///
    /// Defined as repeated [`insert`](BloomFilter::insert): no batching,
    /// no transactional semantics. On a mid-stream read error the filter
    /// keeps every word consumed so far and the error is returned.
    /// Returns the number of words inserted.
    pub fn load_dictionary<R: BufRead>(
        &mut self,
        source: DictionaryLoader<R>,
    ) -> Result<usize, FilterError> {
        let mut inserted = 0;
        for word in source.words() {
            self.insert(&word?);
            inserted += 1;
        }
        debug!(
            strategy = self.strategy().name(),
            words = inserted,
            saturation = self.saturation(),
            "dictionary loaded"
        );
        Ok(inserted)
    }
}
