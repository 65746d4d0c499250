use once_cell::sync::Lazy;

use crate::entities::{
    education::EducationEntry,
    experience::ExperienceItem,
    profile::{Profile, SocialLink},
    skill::SkillGroup,
    timeline::TimelineEntry,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The one profile record per rendered page. Read-only after first access.
pub static PROFILE: Lazy<Profile> = Lazy::new(|| Profile {
    name: "Michal Sousedík".to_string(),
    role: "Senior Frontend Engineer (Angular, TypeScript, NgRx, Nx)".to_string(),
    location: Some("Prague, Czechia".to_string()),
    summary: "Impact‑driven frontend engineer specializing in Angular, TypeScript, RxJS, NgRx, \
              and Nx monorepos. I build robust, accessible, and scalable web apps with clear \
              architecture and strong state management. I enjoy turning complex domain rules \
              into elegant UIs, establishing team standards, and mentoring engineers."
        .to_string(),
    email: None,
    socials: vec![SocialLink {
        label: "LinkedIn".to_string(),
        href: "https://www.linkedin.com/in/michal-soused%C3%ADk-9a4b87144/".to_string(),
    }],
    profile_image: Some("https://i.pravatar.cc/240?u=michal.sousedik".to_string()),
    banner_image: Some(
        "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?q=80&w=2000&auto=format&fit=crop"
            .to_string(),
    ),
    skills: vec![
        SkillGroup {
            title: "Top skills".to_string(),
            items: strings(&["Angular", "TypeScript", "RxJS", "NgRx", "Nx"]),
        },
        SkillGroup {
            title: "Testing/Quality".to_string(),
            items: strings(&["Cypress", "Jasmine", "JUnit", "CI/CD"]),
        },
        SkillGroup {
            title: "Backend".to_string(),
            items: strings(&["Java", "Spring", "Spring Boot", "REST", "Hibernate"]),
        },
        SkillGroup {
            title: "Data/DB".to_string(),
            items: strings(&["SQL", "Oracle"]),
        },
        SkillGroup {
            title: "Architecture".to_string(),
            items: strings(&[
                "Event Sourcing",
                "State Management",
                "Monorepos",
                "System Architecture",
                "Requirements Analysis",
                "UML",
            ]),
        },
        SkillGroup {
            title: "Tools".to_string(),
            items: strings(&["Git", "Maven"]),
        },
    ],
    experience: vec![
        ExperienceItem {
            company: "Commerzbank AG".to_string(),
            role: "Frontend Developer".to_string(),
            start: "Oct 2020".to_string(),
            end: "Present".to_string(),
            location: Some("Prague, Czechia".to_string()),
            summary: Some(
                "Designed and delivered core frontend capabilities for digital account opening \
                 and platform-wide state management in an Nx monorepo."
                    .to_string(),
            ),
            highlights: Some(strings(&[
                "Designed and implemented the frontend for the digital account opening process",
                "Co‑created a dynamic form engine enabling configurable, multi‑step flows",
                "Built an event‑sourced, state‑centric solution across an Nx monorepo",
                "Established architectural guidelines and code quality practices",
                "Interviewed candidates and mentored newcomers for faster onboarding",
            ])),
            technologies: Some(strings(&[
                "Angular", "TypeScript", "RxJS", "NgRx", "Nx", "Cypress", "Jasmine", "REST",
            ])),
        },
        ExperienceItem {
            company: "Commerzbank AG".to_string(),
            role: "Full Stack Engineer".to_string(),
            start: "Dec 2018".to_string(),
            end: "Oct 2020".to_string(),
            location: Some("Prague, Czechia".to_string()),
            summary: Some(
                "Built features across Angular frontends and Spring Boot backends for KYC and \
                 client offboarding workflows."
                    .to_string(),
            ),
            highlights: Some(strings(&[
                "Developed modules for a Know Your Customer (KYC) application",
                "Designed the architecture of Angular apps with a Spring Boot backend for client offboarding",
                "Implemented REST APIs, data models, and automated testing",
            ])),
            technologies: Some(strings(&[
                "Angular", "TypeScript", "Spring", "Spring Boot", "REST", "Oracle", "Hibernate",
                "Maven", "JUnit",
            ])),
        },
        ExperienceItem {
            company: "Commerzbank AG".to_string(),
            role: "Java Developer".to_string(),
            start: "Jul 2017".to_string(),
            end: "Oct 2020".to_string(),
            location: Some("Prague, Czechia".to_string()),
            summary: Some(
                "Delivered backend modules and internal reporting, modernized legacy stacks, \
                 and optimized data‑heavy processing."
                    .to_string(),
            ),
            highlights: Some(strings(&[
                "Designed and developed modules for a cash‑flow monitoring system",
                "Migrated the application from Java 6/JSF to Java 8/PrimeFaces",
                "Implemented an engine for generating data‑intensive Excel reports",
                "Developed a multithreaded solution for efficiently loading complex data tables",
            ])),
            technologies: Some(strings(&[
                "Java", "Spring", "Hibernate", "JSF", "PrimeFaces", "Maven", "JUnit", "Oracle",
                "SQL",
            ])),
        },
    ],
    projects: vec![],
    education: vec![
        EducationEntry {
            school: "Czech Technical University in Prague".to_string(),
            degree: "Master's degree, Computer Software Engineering".to_string(),
            start: "2018".to_string(),
            end: "2020".to_string(),
            location: Some("Prague, Czechia".to_string()),
            details: Some(strings(&[
                "Developed a native iOS application for employee management in small and medium-sized enterprises",
                "Technology Stack: Swift programming language for modern, safe iOS development",
                "Architecture: Implemented MVVM (Model-View-ViewModel) pattern for clean separation of UI code from business logic and data management",
                "Navigation: Designed coordinator pattern for modular navigation control between screens without cluttering ViewControllers",
                "Backend Integration: Built REST API communication layer for JSON data handling (employees, invoices, profiles, and related resources)",
                "UI/UX: Created native UIKit components with custom animations and role-based UI design tailored to each user role",
                "Testing: Established comprehensive testing suite including unit tests for ViewModels, UI tests for interface correctness, and heuristic evaluations for usability",
                "Scalability: Ensured the technology stack and architectural choices support scalability, maintainability, and smooth user experience",
            ])),
            images: Some(strings(&[
                "/assets/thesis-images/sequence-diagram-authorization.png",
                "/assets/thesis-images/ios-app-prototypes.png",
                "/assets/thesis-images/ios-app-screenshots.png",
            ])),
            thesis_link: Some(
                "https://dspace.cvut.cz/bitstream/handle/10467/92929/F8-DP-2021-Sousedik-Michal-thesis.pdf?sequence=-1&isAllowed=y"
                    .to_string(),
            ),
        },
        EducationEntry {
            school: "Czech Technical University in Prague".to_string(),
            degree: "Bachelor's degree, Faculty of Information Technology".to_string(),
            start: "2015".to_string(),
            end: "2018".to_string(),
            location: Some("Prague, Czechia".to_string()),
            details: Some(strings(&[
                "Bachelor's Thesis (2018) – Android Application for DayWork.cz",
                "Developed and implemented two core Android modules for the DayWork.cz platform:",
                "• Job Listings: Displaying part-time opportunities, profile editing, and filtering tools for job-seekers",
                "• Chat & Sync: Real-time messaging and data synchronization between workers and employers",
                "Delivered a polished, production-ready application integrated into the main DayWork.cz app, showcasing strong skills in Android development, UI/UX, and client–server communication",
                "Researched modern approaches to business process modeling and automation",
                "Designed UML diagrams for complex business workflows",
                "Implemented prototype system using Java and Spring Framework",
                "Analyzed requirements gathering and system architecture patterns",
            ])),
            images: None,
            thesis_link: Some(
                "https://dspace.cvut.cz/bitstream/handle/10467/76829/F8-BP-2018-Sousedik-Michal-thesis.pdf?sequence=-1&isAllowed=y"
                    .to_string(),
            ),
        },
    ],
    languages: Some(strings(&["English", "Czech"])),
    timeline: Some(vec![
        TimelineEntry {
            title: "Frontend Developer — Commerzbank AG".to_string(),
            period: "Oct 2020 → Present".to_string(),
            description: Some(
                "Designed and implemented the frontend application for the account opening \
                 process. Co-created an engine for generating dynamic forms. Developed a \
                 scalable event-sourced solution based on the Nx monorepo architecture. \
                 Established architectural guidelines for the development team. Conducted \
                 interviews for job applicants. Provided mentorship and guidance to newcomers, \
                 assisting them in their onboarding and learning process."
                    .to_string(),
            ),
            technologies: Some(strings(&[
                "Angular", "TypeScript", "RxJS", "NgRx", "Nx", "Cypress", "Jasmine", "REST",
            ])),
        },
        TimelineEntry {
            title: "Full Stack Engineer — Commerzbank AG".to_string(),
            period: "Dec 2018 → Oct 2020".to_string(),
            description: Some(
                "Developed modules for a Know Your Customer (KYC) application. Designed the \
                 architecture of Angular-based applications with a Spring Boot backend for the \
                 offboarding process of existing clients."
                    .to_string(),
            ),
            technologies: Some(strings(&[
                "Angular", "TypeScript", "Spring", "Spring Boot", "REST", "Oracle", "Hibernate",
                "Maven", "JUnit",
            ])),
        },
        TimelineEntry {
            title: "Java Developer — Commerzbank AG".to_string(),
            period: "Jul 2017 → Oct 2020".to_string(),
            description: Some(
                "Designed and developed modules for a cash flow monitoring system. Successfully \
                 migrated the application from Java 6 and JSF to Java 8 and Primefaces. \
                 Implemented an engine for generating data-intensive Excel reports. Developed a \
                 multithreaded solution for efficiently loading complex data tables."
                    .to_string(),
            ),
            technologies: Some(strings(&[
                "Java", "Spring", "Hibernate", "JSF", "PrimeFaces", "Maven", "JUnit", "Oracle",
                "SQL",
            ])),
        },
    ]),
});
