//! Read-only lookup tables the pages fall back on.
//!
//! None of this is API data. Icon names from the backend resolve through
//! [`ServiceIcon::resolve`]; services and case studies the backend leaves
//! empty fall back to the tables below.

use crate::resources::CaseStudyIndex;
use crate::types::{CaseStudy, Service};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Sparkles,
    Cloud,
    Code,
    Smartphone,
    Database,
    Shield,
    BarChart,
    Cpu,
}

impl ServiceIcon {
    pub const DEFAULT: ServiceIcon = ServiceIcon::Code;

    /// Exact, case-sensitive match on the icon name; `Code` otherwise.
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            Some("Sparkles") => ServiceIcon::Sparkles,
            Some("Cloud") => ServiceIcon::Cloud,
            Some("Code") => ServiceIcon::Code,
            Some("Smartphone") => ServiceIcon::Smartphone,
            Some("Database") => ServiceIcon::Database,
            Some("Shield") => ServiceIcon::Shield,
            Some("BarChart") => ServiceIcon::BarChart,
            Some("Cpu") => ServiceIcon::Cpu,
            _ => Self::DEFAULT,
        }
    }
}

/// `(id, label)` for the project filter bar. `"all"` disables filtering.
pub const PROJECT_FILTERS: &[(&str, &str)] = &[
    ("all", "All Projects"),
    ("ai", "AI & ML"),
    ("cloud", "Cloud"),
    ("mobile", "Mobile"),
    ("web", "Web"),
    ("data", "Data"),
    ("iot", "IoT"),
    ("security", "Security"),
];

pub const GENERIC_SERVICE_DESCRIPTION: &str =
    "High-quality service delivered by experienced engineers.";

pub const GENERIC_SERVICE_FEATURES: &[&str] = &[
    "Custom solutions",
    "Expert consultation",
    "Ongoing support",
    "Best practices",
];

struct ServiceCopy {
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const SERVICE_COPY: &[ServiceCopy] = &[
    ServiceCopy {
        title: "AI & Machine Learning",
        description: "Build and deploy custom machine learning models and AI-powered products, from data pipelines and model training to production-grade inference and monitoring.",
        features: &[
            "Custom ML model development",
            "Data engineering & pipelines",
            "NLP & conversational AI",
            "Model deployment & monitoring",
        ],
    },
    ServiceCopy {
        title: "Cloud Solutions",
        description: "Design, migrate and operate secure, scalable cloud environments (AWS/Azure/GCP). We provide architecture, cost optimization and cloud-native engineering.",
        features: &[
            "Cloud strategy & migration",
            "Architecture & cost optimization",
            "DevOps & CI/CD",
            "Security & compliance",
        ],
    },
    ServiceCopy {
        title: "Web Development",
        description: "Design and build modern web applications with focus on performance, accessibility and maintainability using React, Next.js, and other modern stacks.",
        features: &[
            "Responsive UI & accessibility",
            "SPA & SSR (React/Next.js)",
            "Headless CMS & e-commerce",
            "Performance optimization",
        ],
    },
    ServiceCopy {
        title: "Mobile Applications",
        description: "Native and cross-platform mobile apps with delightful UX, offline support and smooth performance on iOS, Android, React Native and Flutter.",
        features: &[
            "Native iOS/Android",
            "Cross-platform (React Native/Flutter)",
            "App performance & offline support",
            "Store submission & maintenance",
        ],
    },
];

fn copy_for(title: &str) -> Option<&'static ServiceCopy> {
    SERVICE_COPY.iter().find(|copy| copy.title == title)
}

/// The service's own description, else the canned copy for its title,
/// else a generic line.
pub fn service_description(service: &Service) -> &str {
    if !service.description.trim().is_empty() {
        return &service.description;
    }
    copy_for(&service.title)
        .map(|copy| copy.description)
        .unwrap_or(GENERIC_SERVICE_DESCRIPTION)
}

pub fn service_features(title: &str) -> &'static [&'static str] {
    copy_for(title)
        .map(|copy| copy.features)
        .unwrap_or(GENERIC_SERVICE_FEATURES)
}

struct CaseStudyEntry {
    service: &'static str,
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    url: &'static str,
    logo: &'static str,
}

const FALLBACK_CASE_STUDIES: &[CaseStudyEntry] = &[
    CaseStudyEntry {
        service: "AI & Machine Learning",
        id: "ai-1",
        title: "Predictive Maintenance for Manufacturing",
        summary: "Reduced downtime by 35% using time-series forecasting and anomaly detection models.",
        url: "https://example.com/case-studies/ai-predictive-maintenance",
        logo: "/assets/logos/manufacturing.png",
    },
    CaseStudyEntry {
        service: "AI & Machine Learning",
        id: "ai-2",
        title: "Customer Churn Prediction",
        summary: "Improved retention by 12% through targeted ML-driven campaigns.",
        url: "https://example.com/case-studies/churn-prediction",
        logo: "/assets/logos/retail.png",
    },
    CaseStudyEntry {
        service: "Web Development",
        id: "web-1",
        title: "Headless E-commerce Platform",
        summary: "Built a headless storefront with 60% faster page loads and improved conversion.",
        url: "https://example.com/case-studies/headless-ecommerce",
        logo: "/assets/logos/ecommerce.png",
    },
    CaseStudyEntry {
        service: "Cloud Solutions",
        id: "cloud-1",
        title: "Cloud Migration for Fintech",
        summary: "Migrated legacy systems to cloud-native architecture reducing infra costs by 28%.",
        url: "https://example.com/case-studies/cloud-migration",
        logo: "/assets/logos/cloud.png",
    },
    CaseStudyEntry {
        service: "Mobile Applications",
        id: "mobile-1",
        title: "Cross-platform Mobile App for Logistics",
        summary: "Delivered React Native app, improving delivery tracking and driver routing.",
        url: "https://example.com/case-studies/logistics-app",
        logo: "/assets/logos/logistics.png",
    },
];

impl CaseStudyEntry {
    fn to_case_study(&self) -> CaseStudy {
        CaseStudy {
            id: self.id.to_string(),
            title: self.title.to_string(),
            summary: self.summary.to_string(),
            url: Some(self.url.to_string()),
            logo: Some(self.logo.to_string()),
        }
    }
}

/// Case studies for `service_title`: the backend's when it has any,
/// otherwise the static table's.
pub fn case_studies_for(service_title: &str, remote: Option<&CaseStudyIndex>) -> Vec<CaseStudy> {
    if let Some(studies) = remote.and_then(|index| index.get(service_title)) {
        if !studies.is_empty() {
            return studies.clone();
        }
    }
    FALLBACK_CASE_STUDIES
        .iter()
        .filter(|entry| entry.service == service_title)
        .map(CaseStudyEntry::to_case_study)
        .collect()
}
