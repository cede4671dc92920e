use shared::domain::{Activity, ActivityCollection};

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Join the competitive basketball team for practices and tournaments",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &[],
    ),
    (
        "Tennis Club",
        "Learn tennis skills and participate in friendly matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        12,
        &[],
    ),
    (
        "Drama Club",
        "Perform in theatrical productions and develop acting skills",
        "Wednesdays, 3:30 PM - 5:00 PM",
        25,
        &[],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, and sculpture techniques",
        "Mondays and Fridays, 3:30 PM - 4:30 PM",
        18,
        &[],
    ),
    (
        "Debate Team",
        "Compete in debate competitions and develop argumentation skills",
        "Thursdays, 3:30 PM - 5:00 PM",
        10,
        &[],
    ),
    (
        "Robotics Club",
        "Build and program robots for competitions",
        "Tuesdays and Thursdays, 4:30 PM - 6:00 PM",
        16,
        &[],
    ),
];

/// Built-in catalog used when no catalog file is configured.
pub fn seed_catalog() -> ActivityCollection {
    SEED.iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
