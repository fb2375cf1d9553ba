use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{mpsc, Arc};

use threadpool::ThreadPool;

use crate::huffman::{CodingError, HuffmanTree};

/// Runs many independent encode or decode jobs against one shared tree.
/// The tree is never mutated after construction, so workers share it
/// through an `Arc` without any locking.
pub struct BatchCoder<'a, S> {
    tree: Arc<HuffmanTree<S>>,
    threadpool: &'a ThreadPool,
}

impl<'a, S> BatchCoder<'a, S>
where
    S: Eq + Hash + Clone + Debug + Send + Sync + 'static,
{
    pub fn new(tree: Arc<HuffmanTree<S>>, threadpool: &'a ThreadPool) -> Self {
        BatchCoder { tree, threadpool }
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// Results are returned in the order of the inputs.
    pub fn encode_all(&self, sequences: Vec<Vec<S>>) -> Vec<Result<String, CodingError>> {
        self.run_all(sequences, |tree, sequence| tree.encode(sequence.iter()))
    }

    pub fn decode_all(&self, bit_strings: Vec<String>) -> Vec<Result<Vec<S>, CodingError>> {
        self.run_all(bit_strings, |tree, bits| tree.decode(&bits))
    }

    fn run_all<J, R>(
        &self,
        jobs: Vec<J>,
        work: fn(&HuffmanTree<S>, J) -> Result<R, CodingError>,
    ) -> Vec<Result<R, CodingError>>
    where
        J: Send + 'static,
        R: Send + 'static,
    {
        let job_count = jobs.len();
        log::info!(
            "Dispatching {} jobs to {} worker threads",
            job_count,
            self.threadpool.max_count()
        );
        let (sender, receiver) = mpsc::channel();
        for (position, job) in jobs.into_iter().enumerate() {
            let tree = Arc::clone(&self.tree);
            let sender = sender.clone();
            self.threadpool.execute(move || {
                let result = work(&tree, job);
                // the receiver only disappears when the caller is gone
                let _ = sender.send((position, result));
            });
        }
        drop(sender);

        let mut results: Vec<Option<Result<R, CodingError>>> =
            (0..job_count).map(|_| None).collect();
        for (position, result) in receiver.iter() {
            results[position] = Some(result);
        }
        results.into_iter().flatten().collect()
    }
}
