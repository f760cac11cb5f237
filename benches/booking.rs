use std::time::{Duration, Instant};

use huddle::{Engine, Ms, Role, Slot};

const HOUR: Ms = 3_600_000; // 1 hour in ms

fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() as f64) * p / 100.0) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn print_latency(label: &str, latencies: &mut [Duration]) {
    latencies.sort();
    let total: Duration = latencies.iter().sum();
    let avg = total / latencies.len() as u32;
    println!("  {label}:");
    println!(
        "    n={}, avg={:.2}us, p50={:.2}us, p95={:.2}us, p99={:.2}us, max={:.2}us",
        latencies.len(),
        avg.as_secs_f64() * 1e6,
        percentile(latencies, 50.0).as_secs_f64() * 1e6,
        percentile(latencies, 95.0).as_secs_f64() * 1e6,
        percentile(latencies, 99.0).as_secs_f64() * 1e6,
        latencies.last().unwrap().as_secs_f64() * 1e6,
    );
}

fn main() {
    let bookings: usize = std::env::var("HUDDLE_BENCH_BOOKINGS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);
    let hr_count = 10u64;
    let interviewer_count = 50u64;

    let mut engine = Engine::new();
    let mut hrs = Vec::new();
    let mut interviewers = Vec::new();
    let horizon = Slot::new(0, 2 * 8_760 * HOUR); // two years of availability

    for i in 0..hr_count {
        let id = engine.register_participant(
            format!("HR {i}"),
            format!("hr{i}@bench.local"),
            Role::HrManager,
        );
        engine.lookup_participant_mut(id).unwrap().add_availability(horizon);
        hrs.push(id);
    }
    for i in 0..interviewer_count {
        let id = engine.register_participant(
            format!("Interviewer {i}"),
            format!("iv{i}@bench.local"),
            Role::Interviewer,
        );
        engine.lookup_participant_mut(id).unwrap().add_availability(horizon);
        interviewers.push(id);
    }

    println!(
        "huddle booking bench: {bookings} bookings across {hr_count} HR managers / {interviewer_count} interviewers"
    );

    // Globally disjoint hour slots: every booking succeeds.
    let mut book_latencies = Vec::with_capacity(bookings);
    let mut ids = Vec::with_capacity(bookings);
    let start_all = Instant::now();
    for i in 0..bookings {
        let slot = Slot::new(i as Ms * HOUR, (i as Ms + 1) * HOUR);
        let hr = hrs[i % hr_count as usize];
        let interviewer = interviewers[i % interviewer_count as usize];
        let t = Instant::now();
        let id = engine
            .book_interview(format!("Candidate {i}"), "Engineer", hr, interviewer, slot)
            .expect("disjoint slot must book");
        book_latencies.push(t.elapsed());
        ids.push(id);
    }
    let wall = start_all.elapsed();
    print_latency("book (success)", &mut book_latencies);
    println!(
        "    throughput: {:.0} bookings/s",
        bookings as f64 / wall.as_secs_f64()
    );

    // Rebooking the same slots: every attempt is a conflict rejection.
    let mut reject_latencies = Vec::with_capacity(bookings);
    for i in 0..bookings {
        let slot = Slot::new(i as Ms * HOUR, (i as Ms + 1) * HOUR);
        let hr = hrs[i % hr_count as usize];
        let interviewer = interviewers[i % interviewer_count as usize];
        let t = Instant::now();
        let result = engine.book_interview("Latecomer", "Engineer", hr, interviewer, slot);
        reject_latencies.push(t.elapsed());
        assert!(result.is_err());
    }
    print_latency("book (conflict rejected)", &mut reject_latencies);

    // Cancel/rebook churn over the busiest participant pair.
    let mut churn_latencies = Vec::with_capacity(ids.len());
    for (i, &id) in ids.iter().enumerate() {
        let slot = Slot::new(i as Ms * HOUR, (i as Ms + 1) * HOUR);
        let hr = hrs[i % hr_count as usize];
        let interviewer = interviewers[i % interviewer_count as usize];
        let t = Instant::now();
        assert!(engine.cancel_interview(id));
        engine
            .book_interview(format!("Candidate {i}"), "Engineer", hr, interviewer, slot)
            .expect("freed slot must rebook");
        churn_latencies.push(t.elapsed());
    }
    print_latency("cancel + rebook", &mut churn_latencies);
}
