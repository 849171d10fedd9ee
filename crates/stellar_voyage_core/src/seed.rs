//! crates/stellar_voyage_core/src/seed.rs
//!
//! The built-in planet catalog and quiz question set. Used on first run and
//! whenever the persisted catalog is absent or unreadable.

use crate::domain::{Planet, QuizQuestion};

/// The eight-planet catalog the application ships with.
pub fn seed_planets() -> Vec<Planet> {
    vec![
        Planet {
            id: "1".to_string(),
            name: "Mercury".to_string(),
            distance: "57.9 million km".to_string(),
            size: "4,879 km".to_string(),
            temperature: "167°C".to_string(),
            fact: "Mercury is the smallest planet in our solar system and the closest to the Sun."
                .to_string(),
            color: "from-gray-400 to-gray-600".to_string(),
            orbit_speed: 24.0,
            orbit_size: 100.0,
            diameter: 12.0,
            gravity: "3.7 m/s²".to_string(),
            moons: 0,
            rotation_time: "59 days".to_string(),
        },
        Planet {
            id: "2".to_string(),
            name: "Venus".to_string(),
            distance: "108.2 million km".to_string(),
            size: "12,104 km".to_string(),
            temperature: "464°C".to_string(),
            fact: "Venus is the hottest planet in our solar system, with a thick, toxic atmosphere."
                .to_string(),
            color: "from-orange-300 to-yellow-600".to_string(),
            orbit_speed: 36.0,
            orbit_size: 140.0,
            diameter: 20.0,
            gravity: "8.87 m/s²".to_string(),
            moons: 0,
            rotation_time: "243 days".to_string(),
        },
        Planet {
            id: "3".to_string(),
            name: "Earth".to_string(),
            distance: "149.6 million km".to_string(),
            size: "12,742 km".to_string(),
            temperature: "15°C".to_string(),
            fact: "Earth is our home planet and the only world known to harbor life.".to_string(),
            color: "from-blue-400 to-green-500".to_string(),
            orbit_speed: 60.0,
            orbit_size: 190.0,
            diameter: 22.0,
            gravity: "9.8 m/s²".to_string(),
            moons: 1,
            rotation_time: "24 hours".to_string(),
        },
        Planet {
            id: "4".to_string(),
            name: "Mars".to_string(),
            distance: "227.9 million km".to_string(),
            size: "6,779 km".to_string(),
            temperature: "-65°C".to_string(),
            fact: "Mars is a dusty, cold, desert world with a very thin atmosphere.".to_string(),
            color: "from-red-500 to-red-800".to_string(),
            orbit_speed: 90.0,
            orbit_size: 240.0,
            diameter: 18.0,
            gravity: "3.71 m/s²".to_string(),
            moons: 2,
            rotation_time: "24.6 hours".to_string(),
        },
        Planet {
            id: "5".to_string(),
            name: "Jupiter".to_string(),
            distance: "778.6 million km".to_string(),
            size: "139,820 km".to_string(),
            temperature: "-110°C".to_string(),
            fact: "Jupiter is more than twice as massive as the other planets of our solar system combined."
                .to_string(),
            color: "from-orange-200 to-orange-400".to_string(),
            orbit_speed: 150.0,
            orbit_size: 310.0,
            diameter: 45.0,
            gravity: "24.79 m/s²".to_string(),
            moons: 95,
            rotation_time: "9.9 hours".to_string(),
        },
        Planet {
            id: "6".to_string(),
            name: "Saturn".to_string(),
            distance: "1.4 billion km".to_string(),
            size: "116,460 km".to_string(),
            temperature: "-140°C".to_string(),
            fact: "Adorned with a dazzling, complex system of icy rings, Saturn is unique in our solar system."
                .to_string(),
            color: "from-yellow-200 to-yellow-500".to_string(),
            orbit_speed: 210.0,
            orbit_size: 390.0,
            diameter: 38.0,
            gravity: "10.44 m/s²".to_string(),
            moons: 146,
            rotation_time: "10.7 hours".to_string(),
        },
        Planet {
            id: "7".to_string(),
            name: "Uranus".to_string(),
            distance: "2.9 billion km".to_string(),
            size: "50,724 km".to_string(),
            temperature: "-195°C".to_string(),
            fact: "Uranus is an ice giant that rotates at a nearly 90-degree angle from the plane of its orbit."
                .to_string(),
            color: "from-cyan-300 to-cyan-500".to_string(),
            orbit_speed: 300.0,
            orbit_size: 460.0,
            diameter: 30.0,
            gravity: "8.69 m/s²".to_string(),
            moons: 27,
            rotation_time: "17.2 hours".to_string(),
        },
        Planet {
            id: "8".to_string(),
            name: "Neptune".to_string(),
            distance: "4.5 billion km".to_string(),
            size: "49,244 km".to_string(),
            temperature: "-201°C".to_string(),
            fact: "Neptune is dark, cold, and whipped by supersonic winds, the eighth and most distant planet."
                .to_string(),
            color: "from-blue-600 to-indigo-800".to_string(),
            orbit_speed: 420.0,
            orbit_size: 520.0,
            diameter: 28.0,
            gravity: "11.15 m/s²".to_string(),
            moons: 14,
            rotation_time: "16.1 hours".to_string(),
        },
    ]
}

/// The fixed five-question quiz.
pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: 1,
            question: "Which planet is known as the 'Red Planet'?".to_string(),
            options: vec![
                "Venus".to_string(),
                "Mars".to_string(),
                "Jupiter".to_string(),
                "Saturn".to_string(),
            ],
            correct_answer: 1,
        },
        QuizQuestion {
            id: 2,
            question: "What is the largest planet in our solar system?".to_string(),
            options: vec![
                "Earth".to_string(),
                "Saturn".to_string(),
                "Jupiter".to_string(),
                "Neptune".to_string(),
            ],
            correct_answer: 2,
        },
        QuizQuestion {
            id: 3,
            question: "Which planet has the most famous ring system?".to_string(),
            options: vec![
                "Uranus".to_string(),
                "Neptune".to_string(),
                "Saturn".to_string(),
                "Jupiter".to_string(),
            ],
            correct_answer: 2,
        },
        QuizQuestion {
            id: 4,
            question: "Which planet is closest to the Sun?".to_string(),
            options: vec![
                "Mercury".to_string(),
                "Venus".to_string(),
                "Earth".to_string(),
                "Mars".to_string(),
            ],
            correct_answer: 0,
        },
        QuizQuestion {
            id: 5,
            question: "Which planet is known for its Great Red Spot?".to_string(),
            options: vec![
                "Mars".to_string(),
                "Jupiter".to_string(),
                "Saturn".to_string(),
                "Uranus".to_string(),
            ],
            correct_answer: 1,
        },
    ]
}
