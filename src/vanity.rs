//! Vanity address search.
//!
//! Random keys are generated until the address derived from one contains the
//! requested pattern right after the fixed prefix symbols ("1" for P2PKH,
//! "bc1q"/"tb1q" for P2WPKH). The comparison ignores case. The search has no
//! natural end other than a match, so it can be cancelled through a shared
//! flag and reports progress with a time estimate at a fixed interval.

use rand::{CryptoRng, RngCore};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::{
    address::{Address, AddressType},
    encoding::{base58::is_base58_char, bech32},
    entropy,
    key::{PrivKey, PubKey},
    util::Network,
    Error, Result, Secp256k1
};
use secp256k1::Signing;

/// Attempts between two progress reports.
pub const DEFAULT_REPORT_INTERVAL: u64 = 10_000;

const P2PKH_OFFSET: usize = 1;
const P2WPKH_OFFSET: usize = 4;

// Symbols after the fixed prefix: 34 char P2PKH addresses, 42 char P2WPKH addresses
const P2PKH_MAX_PATTERN: usize = 33;
const P2WPKH_MAX_PATTERN: usize = 38;

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityOptions {
    pub pattern: String,
    pub address_type: AddressType,
    pub network: Network,
    /// Progress is reported every `report_every` attempts. Zero disables reports.
    pub report_every: u64,
    /// Threads in the pool built by `VanitySearch::run`, one search loop each.
    /// Zero uses the rayon default (one per logical CPU).
    pub workers: usize,
}

impl VanityOptions {
    pub fn new(pattern: &str, address_type: AddressType, network: Network) -> Self {
        Self {
            pattern: pattern.to_string(),
            address_type,
            network,
            report_every: DEFAULT_REPORT_INTERVAL,
            workers: 0,
        }
    }
}

/// A validated pattern and the position in the address it is compared at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityPattern {
    pattern: String,
    offset: usize,
}

impl VanityPattern {
    /// Base58 patterns must only use the base58 alphabet, bech32 patterns the
    /// bech32 character set (either case).
    pub fn new(pattern: &str, address_type: AddressType) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::format("vanity pattern cannot be empty"));
        }

        let max = match address_type {
            AddressType::P2PKH => P2PKH_MAX_PATTERN,
            AddressType::P2WPKH => P2WPKH_MAX_PATTERN
        };
        if pattern.chars().count() > max {
            return Err(Error::InvalidFormat(format!(
                "vanity pattern of {} characters cannot fit in a {} address", pattern.chars().count(), address_type.as_str()
            )));
        }

        let offset = match address_type {
            AddressType::P2PKH => {
                if let Some(c) = pattern.chars().find(|c| !c.is_ascii() || !is_base58_char(*c as u8)) {
                    return Err(Error::InvalidFormat(format!("'{}' is not a base58 character", c)));
                }
                P2PKH_OFFSET
            }
            AddressType::P2WPKH => {
                if let Some(c) = pattern.chars().find(|c| bech32::char_value(*c).is_none()) {
                    return Err(Error::InvalidFormat(format!("'{}' is not a bech32 character", c)));
                }
                P2WPKH_OFFSET
            }
        };

        Ok(Self { pattern: pattern.to_string(), offset })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn matches(&self, address: &str) -> bool {
        address
            .get(self.offset..self.offset + self.pattern.len())
            .map_or(false, |s| s.eq_ignore_ascii_case(&self.pattern))
    }

    /// Rough size of the search space: letters match in either case (29 of 58
    /// symbols), every other character is one of 58.
    pub fn permutations(&self) -> f64 {
        self.pattern
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { 29.0 } else { 58.0 })
            .product()
    }
}

/// Estimates the time left from the attempts made so far.
#[derive(Debug, Clone, Copy)]
pub struct Estimator {
    start: Instant,
    total: f64,
}

impl Estimator {
    pub fn new(total: f64) -> Self {
        Self { start: Instant::now(), total }
    }

    pub fn estimate(&self, attempts: u64) -> Duration {
        Self::estimate_at(self.start.elapsed(), self.total, attempts)
    }

    /// `elapsed * (total / attempts) - elapsed`, never negative.
    pub fn estimate_at(elapsed: Duration, total: f64, attempts: u64) -> Duration {
        if attempts == 0 {
            return Duration::from_secs(0);
        }
        let elapsed = elapsed.as_secs_f64();
        let remaining = elapsed * (total / attempts as f64) - elapsed;
        if remaining.is_finite() && remaining > 0.0 {
            Duration::from_secs_f64(remaining)
        } else {
            Duration::from_secs(0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub attempts: u64,
    pub estimated_remaining: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityMatch {
    pub key: PrivKey,
    pub address: String,
    /// Keys tried, the matching one included.
    pub attempts: u64,
}

pub struct VanitySearch {
    options: VanityOptions,
    pattern: VanityPattern,
    cancel: Arc<AtomicBool>,
}

impl VanitySearch {
    pub fn new(options: VanityOptions) -> Result<Self> {
        let pattern = VanityPattern::new(&options.pattern, options.address_type)?;
        Ok(Self { options, pattern, cancel: Arc::new(AtomicBool::new(false)) })
    }

    /// Setting the returned flag stops every running worker after its current attempt.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn pattern(&self) -> &VanityPattern {
        &self.pattern
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    fn check<C: Signing>(&self, secp: &Secp256k1<C>, key: &PrivKey) -> Result<Option<String>> {
        let pk = PubKey::derive_with(secp, key)?;
        let address = Address::new(pk, self.options.address_type, self.options.network).encode()?;
        Ok(if self.pattern.matches(&address) { Some(address) } else { None })
    }

    fn progress(&self, estimator: &Estimator, attempts: u64) -> Progress {
        let progress = Progress { attempts, estimated_remaining: estimator.estimate(attempts) };
        tracing::info!(
            attempts,
            remaining_secs = progress.estimated_remaining.as_secs(),
            "vanity search progress"
        );
        progress
    }

    fn is_report_due(&self, attempts: u64) -> bool {
        self.options.report_every > 0 && attempts % self.options.report_every == 0
    }

    /// Single threaded search drawing keys from `rng`. Deterministic for a seeded RNG.
    /// Returns `Ok(None)` if cancelled.
    pub fn run_with_rng<R, F>(&self, rng: &mut R, mut on_progress: F) -> Result<Option<VanityMatch>>
    where
        R: RngCore + CryptoRng,
        F: FnMut(Progress),
    {
        let secp = Secp256k1::signing_only();
        let estimator = Estimator::new(self.pattern.permutations());
        let mut attempts = 0u64;

        while !self.is_cancelled() {
            let key = PrivKey::from_rng(rng);
            attempts += 1;

            if let Some(address) = self.check(&secp, &key)? {
                tracing::info!(attempts, %address, "vanity address found");
                return Ok(Some(VanityMatch { key, address, attempts }));
            }

            if self.is_report_due(attempts) {
                on_progress(self.progress(&estimator, attempts));
            }
        }

        tracing::debug!(attempts, "vanity search cancelled");
        Ok(None)
    }

    /// Parallel search on a dedicated rayon pool of `workers` threads, each running
    /// its own loop with its own OS random source. Workers share the attempt counter
    /// and stop as soon as one finds a match or the search is cancelled.
    /// Returns `Ok(None)` if cancelled.
    pub fn run<F>(&self, on_progress: F) -> Result<Option<VanityMatch>>
    where
        F: Fn(Progress) + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.workers)
            .build()?;
        pool.install(|| self.search_in_pool(&on_progress))
    }

    fn search_in_pool<F>(&self, on_progress: &F) -> Result<Option<VanityMatch>>
    where
        F: Fn(Progress) + Sync,
    {
        let workers = rayon::current_num_threads();
        let estimator = Estimator::new(self.pattern.permutations());
        let stop = AtomicBool::new(false);
        let attempts = AtomicU64::new(0);
        let found: Mutex<Option<VanityMatch>> = Mutex::new(None);

        tracing::debug!(workers, "starting parallel vanity search");
        (0..workers).into_par_iter().try_for_each(|_| -> Result<()> {
            let secp = Secp256k1::signing_only();
            let mut rng = entropy::osrng();

            while !stop.load(Ordering::Acquire) && !self.is_cancelled() {
                let key = PrivKey::from_rng(&mut rng);
                let checked = self.check(&secp, &key);
                let n = attempts.fetch_add(1, Ordering::Relaxed) + 1;

                match checked {
                    Ok(Some(address)) => {
                        if !stop.swap(true, Ordering::AcqRel) {
                            tracing::info!(attempts = n, %address, "vanity address found");
                            let mut slot = found.lock().unwrap_or_else(|e| e.into_inner());
                            *slot = Some(VanityMatch { key, address, attempts: n });
                        }
                        return Ok(());
                    }
                    Ok(None) => {}
                    Err(e) => {
                        stop.store(true, Ordering::Release);
                        return Err(e);
                    }
                }

                if self.is_report_due(n) {
                    on_progress(self.progress(&estimator, n));
                }
            }

            Ok(())
        })?;

        let result = found.into_inner().unwrap_or_else(|e| e.into_inner());
        if result.is_none() {
            tracing::debug!(attempts = attempts.load(Ordering::Relaxed), "vanity search cancelled");
        }
        Ok(result)
    }
}
