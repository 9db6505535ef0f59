use super::types::{AnalyzeRequest, Publisher, RunSummary};
use crate::aggregate::Aggregate;
use crate::error::AnalyzeError;
use crate::filter::{LineMatch, ScanStats, matches};
use crate::percentile;
use crate::scan::{LineScanner, open_input};
use crate::verbs::VerbSet;
use crossbeam_channel::{Receiver, Sender, bounded};
use std::io::BufRead;
use std::thread;
use tracing::{debug, error, info};

/// Scan, filter, aggregate and summarize one file.
///
/// The scanner and filter run on their own thread and hand matches over a
/// bounded channel; aggregation happens on the calling thread. Only a failure
/// to open the input is returned as an error.
pub fn run(request: &AnalyzeRequest, publisher: Option<Publisher>) -> Result<RunSummary, AnalyzeError> {
    let reader = open_input(&request.input).map_err(|e| AnalyzeError::open(request.input.clone(), e))?;

    info!(
        file = %request.input.display(),
        verbs = %request.verbs,
        percentiles = %request.percentiles,
        "scanning"
    );

    let (tx, rx) = bounded::<LineMatch>(request.channel_capacity);

    let producer = {
        let verbs = request.verbs.clone();
        let max_line_bytes = request.max_line_bytes;
        let source = request.input.display().to_string();

        thread::Builder::new()
            .name("loglat-scanner".to_string())
            .spawn(move || produce(reader, &verbs, max_line_bytes, tx, &source))
            .map_err(AnalyzeError::Spawn)?
    };

    let aggregate = consume(rx, request, publisher.as_ref());

    let scan = producer
        .join()
        .map_err(|_| AnalyzeError::ScannerPanicked {
            path: request.input.clone(),
        })?;

    let publish = publisher.map(|p| p.sink.finish());

    debug!(
        lines = scan.lines_scanned,
        matches = scan.matches_emitted,
        readings = aggregate.len(),
        skipped = aggregate.skipped(),
        "scan complete"
    );

    let verb_counts = aggregate.counts_in_order(&request.verbs);
    let skipped = aggregate.skipped();
    let result = percentile::compute(aggregate, &request.percentiles);

    Ok(RunSummary {
        result,
        verb_counts,
        scan,
        skipped,
        publish,
    })
}

/// Producer: every line of `reader`, once per matching verb.
///
/// Returning drops `tx`, which is what ends the consumer's loop.
fn produce(
    reader: Box<dyn BufRead + Send>,
    verbs: &VerbSet,
    max_line_bytes: usize,
    tx: Sender<LineMatch>,
    source: &str,
) -> ScanStats {
    let mut stats = ScanStats::default();

    for item in LineScanner::new(reader, max_line_bytes) {
        let line = match item {
            Ok(line) => line,
            Err(e) => {
                error!(file = source, error = %e, "error reading file");
                stats.read_error = Some(e.to_string());
                break;
            }
        };

        stats.lines_scanned += 1;

        for m in matches(&line, verbs) {
            if tx.send(m).is_err() {
                return stats;
            }
            stats.matches_emitted += 1;
        }
    }

    stats
}

/// Consumer: sole owner of the aggregate until the channel closes.
fn consume(
    rx: Receiver<LineMatch>,
    request: &AnalyzeRequest,
    publisher: Option<&Publisher>,
) -> Aggregate {
    let mut aggregate = Aggregate::new();

    for m in rx.iter() {
        let Ok(value) = aggregate.ingest(&m, &request.extraction) else {
            continue;
        };

        if let Some(p) = publisher {
            match p.format.reading(&m, value) {
                Some(reading) => p.sink.submit(reading),
                None => debug!(line = %m.line, "no date/time fields; reading not published"),
            }
        }
    }

    aggregate
}
