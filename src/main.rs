use std::io::{self, Write};

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::info;

use huddle::{Engine, Interview, InterviewId, Ms, ParticipantId, Role, Slot};

const HOUR_MS: Ms = 3_600_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("HUDDLE_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    huddle::observability::init(metrics_port);

    let seed = std::env::var("HUDDLE_SEED").map_or(true, |v| v != "0" && v != "false");

    let mut engine = Engine::new();
    if seed {
        seed_demo_data(&mut engine);
    }

    info!("huddle console started");
    info!("  seed: {seed}");
    info!(
        "  metrics: {}",
        metrics_port.map_or("disabled".to_string(), |p| format!("http://0.0.0.0:{p}/metrics"))
    );

    println!("=== HUDDLE INTERVIEW SCHEDULING ===");
    loop {
        println!();
        println!("=== MAIN MENU ===");
        println!("1. View all participants");
        println!("2. View all interviews");
        println!("3. Schedule new interview");
        println!("4. Cancel interview");
        println!("5. View participant's interviews");
        println!("6. Statistics");
        println!("7. Export interviews as JSON");
        println!("0. Exit");

        let Some(choice) = read_input("Enter your choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => list_participants(&engine),
            "2" => list_interviews(&engine),
            "3" => schedule_interview(&mut engine)?,
            "4" => cancel_interview(&mut engine)?,
            "5" => participant_interviews(&engine)?,
            "6" => show_statistics(&engine),
            "7" => export_json(&engine)?,
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Prompt on stdout, read one trimmed line from stdin. None on EOF.
fn read_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_datetime(input: &str) -> Option<Ms> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

fn format_slot(slot: &Slot) -> String {
    match (
        DateTime::<Utc>::from_timestamp_millis(slot.start),
        DateTime::<Utc>::from_timestamp_millis(slot.end),
    ) {
        (Some(start), Some(end)) => {
            format!("{} - {}", start.format("%Y-%m-%d %H:%M"), end.format("%H:%M"))
        }
        _ => format!("[{}, {})", slot.start, slot.end),
    }
}

fn list_participants(engine: &Engine) {
    println!();
    println!("=== ALL PARTICIPANTS ===");
    println!("HR Managers:");
    for p in engine.participants_with_role(Role::HrManager) {
        println!("ID: {}, Name: {}, Email: {}, Role: {}", p.id, p.name, p.email, p.role);
    }
    println!();
    println!("Interviewers:");
    for p in engine.participants_with_role(Role::Interviewer) {
        println!("ID: {}, Name: {}, Email: {}, Role: {}", p.id, p.name, p.email, p.role);
    }
}

fn print_interview(engine: &Engine, interview: &Interview) {
    let name_of = |id: ParticipantId| {
        engine
            .lookup_participant(id)
            .map_or("Unknown".to_string(), |p| p.name.clone())
    };
    println!("Interview ID: {}", interview.id);
    println!("Candidate: {}", interview.candidate_name);
    println!("Position: {}", interview.position);
    println!("HR Manager: {}", name_of(interview.hr_manager_id));
    println!("Interviewer: {}", name_of(interview.interviewer_id));
    println!("Time: {}", format_slot(&interview.slot()));
    println!("Status: {}", interview.status());
    if let Some(notes) = interview.notes() {
        println!("Notes: {notes}");
    }
    println!("---");
}

fn list_interviews(engine: &Engine) {
    println!();
    println!("=== ALL INTERVIEWS ===");
    for interview in engine.all_interviews() {
        print_interview(engine, interview);
    }
}

fn schedule_interview(engine: &mut Engine) -> io::Result<()> {
    println!();
    println!("=== SCHEDULE NEW INTERVIEW ===");
    let Some(candidate) = read_input("Candidate name: ")? else { return Ok(()) };
    let Some(position) = read_input("Position: ")? else { return Ok(()) };
    let Some(hr_id) = read_id("HR manager ID: ")? else { return Ok(()) };
    let Some(interviewer_id) = read_id("Interviewer ID: ")? else { return Ok(()) };
    let Some(start) = read_datetime("Start (YYYY-MM-DD HH:MM): ")? else { return Ok(()) };
    let Some(end) = read_datetime("End (YYYY-MM-DD HH:MM): ")? else { return Ok(()) };
    if start >= end {
        println!("End must be after start.");
        return Ok(());
    }

    match engine.book_interview(
        candidate,
        position,
        ParticipantId(hr_id),
        ParticipantId(interviewer_id),
        Slot::new(start, end),
    ) {
        Ok(id) => println!("Interview {id} scheduled."),
        Err(e) => println!("Could not schedule interview: {e}"),
    }
    Ok(())
}

fn read_id(prompt: &str) -> io::Result<Option<u64>> {
    let Some(input) = read_input(prompt)? else { return Ok(None) };
    match input.parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("Not a valid ID: {input}");
            Ok(None)
        }
    }
}

fn read_datetime(prompt: &str) -> io::Result<Option<Ms>> {
    let Some(input) = read_input(prompt)? else { return Ok(None) };
    match parse_datetime(&input) {
        Some(ms) => Ok(Some(ms)),
        None => {
            println!("Not a valid datetime (expected YYYY-MM-DD HH:MM): {input}");
            Ok(None)
        }
    }
}

fn cancel_interview(engine: &mut Engine) -> io::Result<()> {
    println!();
    println!("=== CANCEL INTERVIEW ===");
    let Some(id) = read_id("Enter interview ID to cancel: ")? else { return Ok(()) };
    if engine.cancel_interview(InterviewId(id)) {
        println!("Interview cancelled successfully.");
    } else {
        println!("Interview not found.");
    }
    Ok(())
}

fn participant_interviews(engine: &Engine) -> io::Result<()> {
    println!();
    println!("=== PARTICIPANT'S INTERVIEWS ===");
    let Some(id) = read_id("Enter participant ID: ")? else { return Ok(()) };
    let id = ParticipantId(id);
    if engine.lookup_participant(id).is_none() {
        println!("Participant not found.");
        return Ok(());
    }
    let interviews = engine.interviews_for_participant(id);
    if interviews.is_empty() {
        println!("No interviews found for this participant.");
    } else {
        for interview in interviews {
            print_interview(engine, interview);
        }
    }
    Ok(())
}

fn show_statistics(engine: &Engine) {
    let stats = engine.stats();
    println!();
    println!("=== SCHEDULING STATISTICS ===");
    println!("Total Participants: {}", stats.participants);
    println!("HR Managers: {}", stats.hr_managers);
    println!("Interviewers: {}", stats.interviewers);
    println!("Total Interviews: {}", stats.interviews);
    println!("Scheduled: {}", stats.scheduled);
    println!("Completed: {}", stats.completed);
    println!("Cancelled: {}", stats.cancelled);
    println!("Rescheduled: {}", stats.rescheduled);
    println!("=============================");
}

fn export_json(engine: &Engine) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&engine.all_interviews())?;
    println!("{json}");
    Ok(())
}

/// Demo dataset: five participants with windows over the next two days and
/// two pre-booked interviews.
fn seed_demo_data(engine: &mut Engine) {
    let hr1 = engine.register_participant("Alice Johnson", "alice@huddle.dev", Role::HrManager);
    engine.register_participant("Bob Smith", "bob@huddle.dev", Role::HrManager);
    let int1 = engine.register_participant("Carol Davis", "carol@huddle.dev", Role::Interviewer);
    let int2 = engine.register_participant("David Wilson", "david@huddle.dev", Role::Interviewer);
    engine.register_participant("Eve Brown", "eve@huddle.dev", Role::Interviewer);

    let now = Utc::now().timestamp_millis();
    let tomorrow = now + 24 * HOUR_MS;
    let day_after = now + 48 * HOUR_MS;

    let alice = engine.lookup_participant_mut(hr1).expect("just registered");
    alice.add_availability(Slot::new(tomorrow, tomorrow + 8 * HOUR_MS));
    alice.add_availability(Slot::new(day_after, day_after + 6 * HOUR_MS));

    let carol = engine.lookup_participant_mut(int1).expect("just registered");
    carol.add_availability(Slot::new(tomorrow, tomorrow + 4 * HOUR_MS));
    carol.add_availability(Slot::new(day_after, day_after + 8 * HOUR_MS));

    let david = engine.lookup_participant_mut(int2).expect("just registered");
    david.add_availability(Slot::new(tomorrow + 2 * HOUR_MS, tomorrow + 6 * HOUR_MS));

    let seeded = [
        engine.book_interview(
            "John Doe",
            "Software Engineer",
            hr1,
            int1,
            Slot::new(tomorrow + HOUR_MS, tomorrow + 2 * HOUR_MS),
        ),
        engine.book_interview(
            "Jane Smith",
            "Product Manager",
            hr1,
            int1,
            Slot::new(day_after + 2 * HOUR_MS, day_after + 3 * HOUR_MS),
        ),
    ];
    for result in seeded {
        if let Err(e) = result {
            tracing::warn!("demo interview not booked: {e}");
        }
    }
}
