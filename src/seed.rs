use crate::models::ActivitySeed;

fn seed(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> ActivitySeed {
    ActivitySeed {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Built-in activities the server starts with when the config has none.
pub fn mergington() -> Vec<ActivitySeed> {
    vec![
        seed(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        seed(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        seed(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        seed(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        seed(
            "Tennis Club",
            "Practice tennis skills and play friendly matches",
            "Wednesdays, 3:30 PM - 5:00 PM",
            10,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        seed(
            "Art Studio",
            "Explore painting, drawing and sculpture",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        seed(
            "Music Ensemble",
            "Play in the school orchestra and small ensembles",
            "Mondays and Wednesdays, 4:00 PM - 5:00 PM",
            25,
            &["ella@mergington.edu", "lucas@mergington.edu"],
        ),
        seed(
            "Debate Club",
            "Develop public speaking and argumentation skills",
            "Tuesdays, 3:30 PM - 5:00 PM",
            16,
            &["charlotte@mergington.edu", "james@mergington.edu"],
        ),
        seed(
            "Robotics Club",
            "Design, build and program robots for competitions",
            "Fridays, 3:30 PM - 5:30 PM",
            14,
            &["benjamin@mergington.edu", "isabella@mergington.edu"],
        ),
    ]
}
