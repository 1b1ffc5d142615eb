//! Skill and job slices keyed by (experience level, career path).

use super::{strings, CareerPathEntry, JobListing, KnowledgeBase};
use crate::guidance::taxonomy::{CareerPath, ExperienceLevel};

/// Salary bands in LPA: fresher, intermediate, senior.
type Bands = [&'static str; 3];

fn job(
    title: &str,
    company: &str,
    bands: Bands,
    location: &str,
    apply_link: &str,
    linkedin_link: &str,
) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        location: Some(location.to_string()),
        salary_fresher: Some(bands[0].to_string()),
        salary_intermediate: Some(bands[1].to_string()),
        salary_senior: Some(bands[2].to_string()),
        apply_link: Some(apply_link.to_string()),
        linkedin_link: Some(linkedin_link.to_string()),
    }
}

/// A listing with salary bands only.
fn bare_job(title: &str, company: &str, bands: Bands) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        location: None,
        salary_fresher: Some(bands[0].to_string()),
        salary_intermediate: Some(bands[1].to_string()),
        salary_senior: Some(bands[2].to_string()),
        apply_link: None,
        linkedin_link: None,
    }
}

fn entry(required: &[&str], recommended: &[&str], jobs: Vec<JobListing>) -> CareerPathEntry {
    CareerPathEntry {
        required_skills: strings(required),
        recommended_skills: strings(recommended),
        jobs,
    }
}

pub(super) fn load(kb: &mut KnowledgeBase) {
    load_student(kb);
    load_fresher(kb);
    load_professional(kb);
}

fn load_student(kb: &mut KnowledgeBase) {
    use ExperienceLevel::Student;

    kb.insert_career_path(
        Student,
        CareerPath::SoftwareEngineer,
        entry(
            &[
                "Python",
                "JavaScript",
                "SQL",
                "Git",
                "Problem Solving",
                "Teamwork",
                "Data Structures",
                "APIs",
            ],
            &["React", "Node.js", "Docker", "AWS", "TypeScript", "MongoDB", "GitHub", "Linux"],
            vec![
                job(
                    "Software Engineer",
                    "Google",
                    ["18-25 LPA", "25-35 LPA", "35-50 LPA"],
                    "Bangalore, India",
                    "https://careers.google.com/jobs/results/?query=software%20engineer",
                    "https://www.linkedin.com/jobs/search/?keywords=software%20engineer&location=bangalore",
                ),
                job(
                    "Software Development Engineer",
                    "Amazon",
                    ["12-18 LPA", "20-30 LPA", "30-45 LPA"],
                    "Hyderabad/Bangalore, India",
                    "https://www.amazon.jobs/en/search-jobs?base_query=software+development+engineer",
                    "https://www.linkedin.com/jobs/search/?keywords=software%20development%20engineer&location=hyderabad",
                ),
                job(
                    "Software Engineer",
                    "Microsoft",
                    ["15-22 LPA", "22-35 LPA", "35-55 LPA"],
                    "Hyderabad/Bangalore, India",
                    "https://careers.microsoft.com/us/en/search-results?query=software%20engineer",
                    "https://www.linkedin.com/jobs/search/?keywords=software%20engineer&location=hyderabad&f_C=1035",
                ),
            ],
        ),
    );

    kb.insert_career_path(
        Student,
        CareerPath::FullStackDeveloper,
        entry(
            &[
                "JavaScript",
                "React",
                "Node.js",
                "MongoDB",
                "Express.js",
                "Git",
                "REST APIs",
                "HTML/CSS",
            ],
            &[
                "TypeScript",
                "Next.js",
                "PostgreSQL",
                "Docker",
                "AWS",
                "GraphQL",
                "Redis",
                "Testing",
            ],
            vec![
                job(
                    "Full Stack Developer",
                    "Flipkart",
                    ["8-15 LPA", "15-25 LPA", "25-40 LPA"],
                    "Bangalore, India",
                    "https://www.flipkartcareers.com/#!/joblist",
                    "https://www.linkedin.com/jobs/search/?keywords=full%20stack%20developer&location=bangalore&f_C=3159",
                ),
                job(
                    "MERN Stack Developer",
                    "Swiggy",
                    ["6-12 LPA", "12-20 LPA", "20-35 LPA"],
                    "Bangalore, India",
                    "https://careers.swiggy.com/#!/",
                    "https://www.linkedin.com/jobs/search/?keywords=mern%20stack%20developer&location=bangalore&f_C=1047",
                ),
                job(
                    "Full Stack Engineer",
                    "Zomato",
                    ["7-14 LPA", "14-22 LPA", "22-38 LPA"],
                    "Gurgaon/Delhi NCR, India",
                    "https://careers.zomato.com/jobs",
                    "https://www.linkedin.com/jobs/search/?keywords=full%20stack%20engineer&location=gurgaon&f_C=2461",
                ),
            ],
        ),
    );

    kb.insert_career_path(
        Student,
        CareerPath::DataAnalyst,
        entry(
            &[
                "Python",
                "SQL",
                "Excel",
                "Statistics",
                "Data Visualization",
                "Pandas",
                "NumPy",
            ],
            &[
                "Tableau",
                "Power BI",
                "Machine Learning",
                "R",
                "Apache Spark",
                "AWS Redshift",
                "Google Analytics",
            ],
            vec![
                bare_job(
                    "Data Analyst",
                    "Analytics Inc",
                    ["3-5 LPA", "6-10 LPA", "12-18 LPA"],
                ),
                bare_job(
                    "Business Intelligence Analyst",
                    "BizData",
                    ["4-6 LPA", "8-12 LPA", "15-22 LPA"],
                ),
            ],
        ),
    );

    kb.insert_career_path(
        Student,
        CareerPath::DataScientist,
        entry(
            &[
                "Python",
                "Machine Learning",
                "Statistics",
                "SQL",
                "Pandas",
                "Scikit-learn",
                "Jupyter",
            ],
            &[
                "TensorFlow",
                "PyTorch",
                "Deep Learning",
                "NLP",
                "Computer Vision",
                "AWS SageMaker",
                "Docker",
            ],
            vec![
                job(
                    "Data Scientist",
                    "Netflix",
                    ["20-30 LPA", "30-45 LPA", "45-70 LPA"],
                    "Remote/Global",
                    "https://jobs.netflix.com/search?q=data+scientist",
                    "https://www.linkedin.com/jobs/search/?keywords=data%20scientist&f_C=165158",
                ),
                job(
                    "Machine Learning Engineer",
                    "Meta",
                    ["18-28 LPA", "28-42 LPA", "42-65 LPA"],
                    "Hyderabad, India",
                    "https://www.metacareers.com/jobs/?q=machine+learning",
                    "https://www.linkedin.com/jobs/search/?keywords=machine%20learning%20engineer&location=hyderabad&f_C=10667",
                ),
                job(
                    "Data Scientist",
                    "PayPal",
                    ["12-20 LPA", "20-32 LPA", "32-50 LPA"],
                    "Chennai/Bangalore, India",
                    "https://www.paypal.com/us/webapps/mpp/jobs",
                    "https://www.linkedin.com/jobs/search/?keywords=data%20scientist&location=bangalore&f_C=1667",
                ),
            ],
        ),
    );

    kb.insert_career_path(
        Student,
        CareerPath::DevopsEngineer,
        entry(
            &[
                "Linux",
                "Git",
                "Docker",
                "Kubernetes",
                "AWS",
                "CI/CD",
                "Shell Scripting",
                "Monitoring",
            ],
            &[
                "Terraform",
                "Jenkins",
                "Ansible",
                "Prometheus",
                "Grafana",
                "Python",
                "Go",
                "Helm",
            ],
            vec![
                job(
                    "DevOps Engineer",
                    "Uber",
                    ["15-25 LPA", "25-38 LPA", "38-55 LPA"],
                    "Bangalore, India",
                    "https://www.uber.com/global/en/careers/list/?query=devops",
                    "https://www.linkedin.com/jobs/search/?keywords=devops%20engineer&location=bangalore&f_C=1815218",
                ),
                job(
                    "Site Reliability Engineer",
                    "Spotify",
                    ["18-28 LPA", "28-42 LPA", "42-65 LPA"],
                    "Remote/Global",
                    "https://www.spotifyjobs.com/search-jobs/?keywords=site%20reliability%20engineer",
                    "https://www.linkedin.com/jobs/search/?keywords=site%20reliability%20engineer&f_C=4688",
                ),
                job(
                    "Cloud Engineer",
                    "Airbnb",
                    ["16-26 LPA", "26-40 LPA", "40-60 LPA"],
                    "Remote/Global",
                    "https://careers.airbnb.com/positions/",
                    "https://www.linkedin.com/jobs/search/?keywords=cloud%20engineer&f_C=1592",
                ),
            ],
        ),
    );

    kb.insert_career_path(
        Student,
        CareerPath::CybersecurityAnalyst,
        entry(
            &[
                "Network Security",
                "Ethical Hacking",
                "Linux",
                "Python",
                "Risk Assessment",
                "Firewalls",
                "Cryptography",
            ],
            &[
                "Kali Linux",
                "Metasploit",
                "SIEM",
                "Cloud Security",
                "CISSP",
                "CEH",
                "Penetration Testing",
            ],
            vec![
                job(
                    "Cybersecurity Analyst",
                    "Cisco",
                    ["8-15 LPA", "15-25 LPA", "25-40 LPA"],
                    "Bangalore, India",
                    "https://jobs.cisco.com/jobs/SearchJobs/?3_109_3=cybersecurity",
                    "https://www.linkedin.com/jobs/search/?keywords=cybersecurity%20analyst&location=bangalore&f_C=1063",
                ),
                job(
                    "Information Security Analyst",
                    "IBM",
                    ["7-14 LPA", "14-22 LPA", "22-35 LPA"],
                    "Multiple Locations, India",
                    "https://www.ibm.com/employment/us-en/search-jobs.html?query=cybersecurity",
                    "https://www.linkedin.com/jobs/search/?keywords=information%20security%20analyst&location=india&f_C=1009",
                ),
                job(
                    "Security Operations Center Analyst",
                    "Deloitte",
                    ["6-12 LPA", "12-20 LPA", "20-32 LPA"],
                    "Mumbai/Delhi, India",
                    "https://www2.deloitte.com/us/en/careers/careers.html",
                    "https://www.linkedin.com/jobs/search/?keywords=security%20operations%20center&location=mumbai&f_C=1038",
                ),
            ],
        ),
    );
}

fn load_fresher(kb: &mut KnowledgeBase) {
    kb.insert_career_path(
        ExperienceLevel::Fresher,
        CareerPath::SoftwareEngineer,
        entry(
            &[
                "Python",
                "JavaScript",
                "SQL",
                "Git",
                "Data Structures",
                "Algorithms",
                "System Design",
                "APIs",
            ],
            &[
                "React",
                "Node.js",
                "Docker",
                "AWS",
                "TypeScript",
                "MongoDB",
                "Testing",
                "Microservices",
            ],
            vec![
                job(
                    "Associate Software Engineer",
                    "TCS",
                    ["3-5 LPA", "6-10 LPA", "12-18 LPA"],
                    "Multiple Locations, India",
                    "https://www.tcs.com/careers",
                    "https://www.linkedin.com/jobs/search/?keywords=software%20engineer&location=india&f_C=1353",
                ),
                job(
                    "Software Engineer Trainee",
                    "Infosys",
                    ["3-4 LPA", "6-9 LPA", "10-15 LPA"],
                    "Multiple Locations, India",
                    "https://www.infosys.com/careers.html",
                    "https://www.linkedin.com/jobs/search/?keywords=software%20engineer&location=india&f_C=1283",
                ),
                job(
                    "Graduate Software Engineer",
                    "Wipro",
                    ["3-5 LPA", "6-10 LPA", "12-18 LPA"],
                    "Multiple Locations, India",
                    "https://careers.wipro.com/",
                    "https://www.linkedin.com/jobs/search/?keywords=software%20engineer&location=india&f_C=1411",
                ),
            ],
        ),
    );
}

fn load_professional(kb: &mut KnowledgeBase) {
    kb.insert_career_path(
        ExperienceLevel::Professional,
        CareerPath::SeniorSoftwareEngineer,
        entry(
            &[
                "Python",
                "JavaScript",
                "SQL",
                "Git",
                "System Architecture",
                "Leadership",
                "Mentoring",
                "Technical Design",
            ],
            &[
                "Cloud Architecture",
                "Microservices",
                "DevOps",
                "AI/ML",
                "Team Management",
                "Agile",
                "Scrum",
            ],
            vec![
                job(
                    "Senior Software Engineer",
                    "Adobe",
                    ["20-32 LPA", "32-45 LPA", "45-70 LPA"],
                    "Noida/Bangalore, India",
                    "https://www.adobe.com/careers.html",
                    "https://www.linkedin.com/jobs/search/?keywords=senior%20software%20engineer&location=bangalore&f_C=1480",
                ),
                job(
                    "Principal Engineer",
                    "LinkedIn",
                    ["25-40 LPA", "40-60 LPA", "60-90 LPA"],
                    "Bangalore, India",
                    "https://www.linkedin.com/company/linkedin/jobs/",
                    "https://www.linkedin.com/jobs/search/?keywords=principal%20engineer&location=bangalore&f_C=1337",
                ),
                job(
                    "Engineering Manager",
                    "Stripe",
                    ["30-45 LPA", "45-65 LPA", "65-100 LPA"],
                    "Remote/Global",
                    "https://stripe.com/jobs",
                    "https://www.linkedin.com/jobs/search/?keywords=engineering%20manager&f_C=2136",
                ),
            ],
        ),
    );
}
