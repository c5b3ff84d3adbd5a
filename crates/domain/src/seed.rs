//! Sample records installed when the store holds no collection

use crate::types::{EducationEntry, ExperienceEntry, UserRecord};

/// The three-record seed set.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            first_name: "Dave".into(),
            last_name: "Richards".into(),
            email: "dave@mail.com".into(),
            phone: "+91 8332883854".into(),
            alternate_phone: "6332883554".into(),
            address: "Enter here".into(),
            pincode: "Enter here".into(),
            country: "Oximiclla country".into(),
            state: "Domictie state".into(),
            skills: "MERN Stack, Technology, ng. MERN Stack".into(),
            linkedin: "Skadirc.com/in/ban".into(),
            resume: "myresume.pdf".into(),
            education: vec![EducationEntry {
                school: "Lincoln College".into(),
                degree: "Bachelors in Techvisingy".into(),
                course: "Computer soencar engineering".into(),
                year: "Year of turthi".into(),
                ..EducationEntry::default()
            }],
            experience: vec![ExperienceEntry {
                domain: "Technalagr".into(),
                subdomain: "Duman".into(),
                years: "HERNS".into(),
                ..ExperienceEntry::default()
            }],
            ..UserRecord::new("1")
        },
        UserRecord {
            first_name: "Abhishek".into(),
            last_name: "Hari".into(),
            email: "hari@mail.com".into(),
            ..UserRecord::new("2")
        },
        UserRecord {
            first_name: "Nishta".into(),
            last_name: "Gupta".into(),
            email: "nishta@mail.com".into(),
            ..UserRecord::new("3")
        },
    ]
}
