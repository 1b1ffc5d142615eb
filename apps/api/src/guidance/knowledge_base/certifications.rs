//! Certification catalogue keyed by (career path, certification level).

use super::{Certification, KnowledgeBase};
use crate::guidance::taxonomy::{CareerPath, CertificationLevel};

/// (name, provider, link, duration, cost)
type CertRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

fn certs(rows: &[CertRow]) -> Vec<Certification> {
    rows.iter()
        .map(|(name, provider, link, duration, cost)| Certification {
            name: name.to_string(),
            provider: provider.to_string(),
            link: link.to_string(),
            duration: duration.to_string(),
            cost: cost.to_string(),
        })
        .collect()
}

pub(super) fn load(kb: &mut KnowledgeBase) {
    use CertificationLevel::{Advanced, EntryLevel, Intermediate};

    let catalogue: [(CareerPath, CertificationLevel, &[CertRow]); 15] = [
        (
            CareerPath::SoftwareEngineer,
            EntryLevel,
            &[
                ("Google IT Support Professional Certificate", "Google", "https://www.coursera.org/professional-certificates/google-it-support", "6 months", "₹3,500/month"),
                ("AWS Certified Cloud Practitioner", "Amazon", "https://aws.amazon.com/certification/certified-cloud-practitioner/", "3 months", "₹10,000"),
                ("Microsoft Certified: Azure Fundamentals", "Microsoft", "https://learn.microsoft.com/en-us/certifications/azure-fundamentals/", "2 months", "₹5,000"),
            ],
        ),
        (
            CareerPath::SoftwareEngineer,
            Intermediate,
            &[
                ("Google Data Analytics Professional Certificate", "Google", "https://www.coursera.org/professional-certificates/google-data-analytics", "6 months", "₹3,500/month"),
                ("Meta React Developer Certificate", "Meta", "https://www.coursera.org/professional-certificates/meta-react-developer", "7 months", "₹3,500/month"),
                ("AWS Certified Developer - Associate", "Amazon", "https://aws.amazon.com/certification/certified-developer-associate/", "4 months", "₹15,000"),
            ],
        ),
        (
            CareerPath::SoftwareEngineer,
            Advanced,
            &[
                ("Google Cloud Professional Developer", "Google", "https://cloud.google.com/certification/cloud-developer", "6 months", "₹20,000"),
                ("Microsoft Certified: Azure Developer Associate", "Microsoft", "https://learn.microsoft.com/en-us/certifications/azure-developer-associate/", "5 months", "₹18,000"),
            ],
        ),
        (
            CareerPath::FullStackDeveloper,
            EntryLevel,
            &[
                ("IBM Full Stack Software Developer", "IBM", "https://www.coursera.org/professional-certificates/ibm-full-stack-cloud-developer", "6 months", "₹3,500/month"),
                ("Meta Front-End Developer", "Meta", "https://www.coursera.org/professional-certificates/meta-front-end-developer", "7 months", "₹3,500/month"),
            ],
        ),
        (
            CareerPath::FullStackDeveloper,
            Intermediate,
            &[
                ("MERN Stack Developer Certification", "Udacity", "https://www.udacity.com/course/react-nanodegree--nd019", "4 months", "₹4,000/month"),
                ("Full Stack Web Development", "freeCodeCamp", "https://www.freecodecamp.org/learn/full-stack-developer/", "12 months", "Free"),
            ],
        ),
        (
            CareerPath::FullStackDeveloper,
            Advanced,
            &[
                ("AWS Certified Solutions Architect", "Amazon", "https://aws.amazon.com/certification/certified-solutions-architect-associate/", "6 months", "₹25,000"),
            ],
        ),
        (
            CareerPath::DataScientist,
            EntryLevel,
            &[
                ("Google Data Analytics", "Google", "https://www.coursera.org/professional-certificates/google-data-analytics", "6 months", "₹3,500/month"),
                ("IBM Data Analyst", "IBM", "https://www.coursera.org/professional-certificates/ibm-data-analyst", "5 months", "₹3,500/month"),
            ],
        ),
        (
            CareerPath::DataScientist,
            Intermediate,
            &[
                ("TensorFlow Developer Certificate", "Google", "https://www.tensorflow.org/certificate", "3 months", "₹15,000"),
                ("AWS Certified Machine Learning", "Amazon", "https://aws.amazon.com/certification/certified-machine-learning-specialty/", "6 months", "₹30,000"),
            ],
        ),
        (
            CareerPath::DataScientist,
            Advanced,
            &[
                ("Deep Learning Specialization", "deeplearning.ai", "https://www.coursera.org/specializations/deep-learning", "6 months", "₹4,000/month"),
                ("Machine Learning Engineer Nanodegree", "Udacity", "https://www.udacity.com/course/machine-learning-engineer-nanodegree--nd009t", "4 months", "₹4,000/month"),
            ],
        ),
        (
            CareerPath::DevopsEngineer,
            EntryLevel,
            &[
                ("Google Cloud Fundamentals", "Google", "https://cloud.google.com/certification/cloud-digital-leader", "2 months", "₹8,000"),
                ("AWS Certified Cloud Practitioner", "Amazon", "https://aws.amazon.com/certification/certified-cloud-practitioner/", "3 months", "₹10,000"),
            ],
        ),
        (
            CareerPath::DevopsEngineer,
            Intermediate,
            &[
                ("Docker Certified Associate", "Docker", "https://docker.com/products/docker-desktop", "2 months", "₹15,000"),
                ("Kubernetes Certified Administrator", "CNCF", "https://www.cncf.io/certification/cka/", "3 months", "₹20,000"),
            ],
        ),
        (
            CareerPath::DevopsEngineer,
            Advanced,
            &[
                ("AWS Certified DevOps Engineer", "Amazon", "https://aws.amazon.com/certification/certified-devops-engineer-professional/", "6 months", "₹35,000"),
                ("Certified Kubernetes Administrator", "Linux Foundation", "https://training.linuxfoundation.org/certification/certified-kubernetes-administrator-cka/", "4 months", "₹25,000"),
            ],
        ),
        (
            CareerPath::CybersecurityAnalyst,
            EntryLevel,
            &[
                ("Google Cybersecurity Certificate", "Google", "https://www.coursera.org/professional-certificates/google-cybersecurity", "6 months", "₹3,500/month"),
                ("CompTIA Security+", "CompTIA", "https://www.comptia.org/certifications/security", "3 months", "₹12,000"),
            ],
        ),
        (
            CareerPath::CybersecurityAnalyst,
            Intermediate,
            &[
                ("Certified Ethical Hacker (CEH)", "EC-Council", "https://www.eccouncil.org/train-certify/certified-ethical-hacker-ceh/", "4 months", "₹20,000"),
                ("CISSP Certification", "ISC2", "https://www.isc2.org/certifications/cissp", "6 months", "₹30,000"),
            ],
        ),
        (
            CareerPath::CybersecurityAnalyst,
            Advanced,
            &[
                ("Certified Information Systems Security Professional", "ISC2", "https://www.isc2.org/certifications/cissp", "6 months", "₹35,000"),
                ("Offensive Security Certified Professional", "Offensive Security", "https://www.offsec.com/courses/pen-200/", "3 months", "₹50,000"),
            ],
        ),
    ];

    for (path, level, rows) in catalogue {
        kb.insert_certifications(path, level, certs(rows));
    }
}
