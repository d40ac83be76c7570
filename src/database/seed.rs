use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: usize,
    participants: [&'static str; 2],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: ["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: ["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Team-based soccer training and matches",
        schedule: "Wednesdays and Saturdays, 4:00 PM - 6:00 PM",
        max_participants: 18,
        participants: ["alex@mergington.edu", "chris@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Practice basketball skills and play team games",
        schedule: "Tuesdays and Thursdays, 5:00 PM - 6:30 PM",
        max_participants: 15,
        participants: ["jordan@mergington.edu", "taylor@mergington.edu"],
    },
    SeedActivity {
        name: "Painting Workshop",
        description: "Learn painting techniques and create artworks",
        schedule: "Mondays, 3:00 PM - 4:30 PM",
        max_participants: 12,
        participants: ["mia@mergington.edu", "lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Perform plays and develop acting skills",
        schedule: "Fridays, 4:00 PM - 6:00 PM",
        max_participants: 20,
        participants: ["charlotte@mergington.edu", "liam@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Explore advanced mathematical concepts and problem-solving",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: ["noah@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Robotics Club",
        description: "Build robots and compete in robotics competitions",
        schedule: "Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 10,
        participants: ["ethan@mergington.edu", "zoe@mergington.edu"],
    },
    SeedActivity {
        name: "Volleyball Club",
        description: "Learn volleyball techniques and play friendly matches",
        schedule: "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: ["ryan@mergington.edu", "lily@mergington.edu"],
    },
    SeedActivity {
        name: "Track and Field Team",
        description: "Training in various track and field events",
        schedule: "Mondays, Wednesdays, and Fridays, 3:00 PM - 5:00 PM",
        max_participants: 25,
        participants: ["natalie@mergington.edu", "zach@mergington.edu"],
    },
    SeedActivity {
        name: "Photography Club",
        description: "Explore photography techniques and edit images",
        schedule: "Wednesdays, 3:00 PM - 5:00 PM",
        max_participants: 15,
        participants: ["isabella@mergington.edu", "mason@mergington.edu"],
    },
    SeedActivity {
        name: "Music Ensemble",
        description: "Practice instruments and perform musical pieces",
        schedule: "Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 20,
        participants: ["elena@mergington.edu", "oliver@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Tuesdays, 5:00 PM - 6:30 PM",
        max_participants: 16,
        participants: ["caleb@mergington.edu", "hannah@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Conduct experiments and explore scientific topics",
        schedule: "Fridays, 3:00 PM - 5:00 PM",
        max_participants: 18,
        participants: ["tyler@mergington.edu", "amelia@mergington.edu"],
    },
];

/// The activities every process starts with, in display order.
pub fn seed_activities() -> Vec<Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|s| Activity {
            name: s.name.to_string(),
            description: s.description.to_string(),
            schedule: s.schedule.to_string(),
            max_participants: s.max_participants,
            participants: s.participants.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
