//! Per-skill metadata: category tags, curated learning resources, topic breakdowns.

use super::{topics, KnowledgeBase, LearningResource};

const CATEGORIES: &[(&str, &str)] = &[
    ("Python", "Programming Language"),
    ("JavaScript", "Programming Language"),
    ("Java", "Programming Language"),
    ("C++", "Programming Language"),
    ("TypeScript", "Programming Language"),
    ("SQL", "Database"),
    ("MongoDB", "Database"),
    ("PostgreSQL", "Database"),
    ("React", "Frontend Framework"),
    ("Node.js", "Backend Framework"),
    ("HTML", "Web Technology"),
    ("CSS", "Web Technology"),
    ("Git", "Version Control"),
    ("Docker", "Containerization"),
    ("Kubernetes", "Container Orchestration"),
    ("AWS", "Cloud Platform"),
    ("Problem Solving", "Soft Skill"),
    ("Communication", "Soft Skill"),
    ("Teamwork", "Soft Skill"),
    ("Leadership", "Soft Skill"),
    ("Tableau", "Data Visualization"),
    ("Power BI", "Data Visualization"),
    ("Machine Learning", "Data Science"),
    ("Statistics", "Mathematics"),
    ("Jenkins", "CI/CD"),
    ("Terraform", "Infrastructure as Code"),
];

/// (skill, [(name, url, type)])
type ResourceRow = (&'static str, [(&'static str, &'static str, &'static str); 4]);

const RESOURCES: &[ResourceRow] = &[
    (
        "Python",
        [
            ("Python Official Documentation", "https://docs.python.org/3/", "Documentation"),
            ("freeCodeCamp Python Course", "https://www.freecodecamp.org/learn/scientific-computing-with-python/", "Course"),
            ("Python for Everybody (Coursera)", "https://www.coursera.org/specializations/python", "Course"),
            ("Automate the Boring Stuff with Python", "https://automatetheboringstuff.com/", "Book"),
        ],
    ),
    (
        "JavaScript",
        [
            ("MDN JavaScript Guide", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide", "Documentation"),
            ("JavaScript.info", "https://javascript.info/", "Tutorial"),
            ("Eloquent JavaScript", "https://eloquentjavascript.net/", "Book"),
            ("freeCodeCamp JavaScript", "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/", "Course"),
        ],
    ),
    (
        "SQL",
        [
            ("SQLZoo Interactive SQL", "https://sqlzoo.net/", "Interactive"),
            ("W3Schools SQL Tutorial", "https://www.w3schools.com/sql/", "Tutorial"),
            ("Mode Analytics SQL Tutorial", "https://mode.com/sql-tutorial/", "Tutorial"),
            ("LeetCode SQL Problems", "https://leetcode.com/problemset/database/", "Practice"),
        ],
    ),
    (
        "Git",
        [
            ("Git Official Documentation", "https://git-scm.com/doc", "Documentation"),
            ("Learn Git Branching", "https://learngitbranching.js.org/", "Interactive"),
            ("GitHub Learning Lab", "https://lab.github.com/", "Tutorial"),
            ("Atlassian Git Tutorials", "https://www.atlassian.com/git/tutorials", "Tutorial"),
        ],
    ),
    (
        "React",
        [
            ("React Official Tutorial", "https://react.dev/learn/tutorial-tic-tac-toe", "Tutorial"),
            ("React Documentation", "https://react.dev/", "Documentation"),
            ("freeCodeCamp React Course", "https://www.freecodecamp.org/learn/front-end-development-libraries/", "Course"),
            ("React Router Documentation", "https://reactrouter.com/en/main/start/tutorial", "Documentation"),
        ],
    ),
    (
        "Node.js",
        [
            ("Node.js Official Documentation", "https://nodejs.org/en/docs/", "Documentation"),
            ("Node.js Learn", "https://nodejs.org/en/learn/", "Tutorial"),
            ("Express.js Guide", "https://expressjs.com/en/guide/routing.html", "Documentation"),
            ("Node.js Best Practices", "https://github.com/goldbergyoni/nodebestpractices", "Guide"),
        ],
    ),
    (
        "Docker",
        [
            ("Docker Official Docs", "https://docs.docker.com/", "Documentation"),
            ("Docker for Beginners", "https://docker-curriculum.com/", "Tutorial"),
            ("Play with Docker", "https://labs.play-with-docker.com/", "Interactive"),
            ("Docker Cheat Sheet", "https://dockerlabs.collabnix.com/docker/cheatsheet/", "Reference"),
        ],
    ),
    (
        "AWS",
        [
            ("AWS Free Tier", "https://aws.amazon.com/free/", "Platform"),
            ("AWS Training", "https://aws.training/", "Course"),
            ("AWS Documentation", "https://docs.aws.amazon.com/", "Documentation"),
            ("A Cloud Guru AWS Course", "https://acloudguru.com/course/aws-certified-solutions-architect-associate", "Course"),
        ],
    ),
    (
        "Problem Solving",
        [
            ("LeetCode", "https://leetcode.com/", "Practice Platform"),
            ("HackerRank", "https://www.hackerrank.com/", "Practice Platform"),
            ("CodeSignal", "https://codesignal.com/", "Practice Platform"),
            ("GeeksforGeeks Problem Solving", "https://www.geeksforgeeks.org/problem-solving/", "Tutorial"),
        ],
    ),
    (
        "Communication",
        [
            ("Toastmasters International", "https://www.toastmasters.org/", "Organization"),
            ("Coursera Communication Skills", "https://www.coursera.org/courses?query=communication%20skills", "Course"),
            ("LinkedIn Learning Communication", "https://www.linkedin.com/learning/topics/communication-skills", "Course"),
            ("TED Talks on Communication", "https://www.ted.com/topics/communication", "Videos"),
        ],
    ),
    (
        "Machine Learning",
        [
            ("Coursera ML by Andrew Ng", "https://www.coursera.org/learn/machine-learning", "Course"),
            ("fast.ai Practical Deep Learning", "https://course.fast.ai/", "Course"),
            ("Scikit-learn Documentation", "https://scikit-learn.org/stable/user_guide.html", "Documentation"),
            ("Kaggle Learn ML", "https://www.kaggle.com/learn", "Interactive"),
        ],
    ),
    (
        "Tableau",
        [
            ("Tableau Public", "https://public.tableau.com/", "Platform"),
            ("Tableau eLearning", "https://elearning.tableau.com/", "Course"),
            ("Tableau Training Videos", "https://www.tableau.com/learn/training", "Video"),
            ("Tableau Community", "https://community.tableau.com/", "Community"),
        ],
    ),
];

pub(super) fn load(kb: &mut KnowledgeBase) {
    for (skill, category) in CATEGORIES {
        kb.insert_skill_category(skill, category);
    }

    for (skill, rows) in RESOURCES {
        let resources = rows
            .iter()
            .map(|(name, url, kind)| LearningResource::new(*name, *url, *kind))
            .collect();
        kb.insert_learning_resources(skill, resources);
    }

    load_topics(kb);
}

fn load_topics(kb: &mut KnowledgeBase) {
    kb.insert_skill_topics(
        "Python",
        topics(&[
            ("Fundamentals", &["Variables & Data Types", "Control Structures", "Functions", "Modules & Packages", "Error Handling"]),
            ("Data Structures", &["Lists", "Tuples", "Dictionaries", "Sets", "List Comprehensions"]),
            ("Advanced", &["Object-Oriented Programming", "Decorators", "Generators", "Context Managers", "Metaclasses"]),
            ("Libraries", &["NumPy", "Pandas", "Matplotlib", "Requests", "Beautiful Soup", "Flask/Django"]),
            ("Modern Python", &["Type Hints", "Async/Await", "Data Classes", "Pattern Matching", "Structural Pattern Matching"]),
        ]),
    );
    kb.insert_skill_topics(
        "JavaScript",
        topics(&[
            ("Fundamentals", &["Variables & Data Types", "Operators", "Control Structures", "Functions", "Scope & Closures"]),
            ("ES6+", &["Arrow Functions", "Template Literals", "Destructuring", "Spread/Rest Operators", "Modules"]),
            ("Advanced", &["Promises & Async/Await", "Event Loop", "Prototypes", "Classes", "Error Handling"]),
            ("Frameworks", &["React Basics", "Node.js Fundamentals", "Express.js", "Next.js", "Vue.js"]),
            ("Modern JS", &["TypeScript Basics", "Web APIs", "Service Workers", "Web Components", "Module Bundlers"]),
        ]),
    );
    kb.insert_skill_topics(
        "React",
        topics(&[
            ("Fundamentals", &["JSX", "Components", "Props", "State", "Lifecycle Methods"]),
            ("Hooks", &["useState", "useEffect", "useContext", "useReducer", "Custom Hooks"]),
            ("Advanced", &["Context API", "Render Props", "Higher-Order Components", "Error Boundaries", "Refs"]),
            ("Modern React", &["React 18 Features", "Concurrent Features", "Suspense", "Server Components", "React Query"]),
            ("Ecosystem", &["React Router", "Redux/Zustand", "Testing Library", "Styled Components", "Next.js"]),
        ]),
    );
    kb.insert_skill_topics(
        "Node.js",
        topics(&[
            ("Fundamentals", &["Modules", "NPM", "File System", "Events", "Streams"]),
            ("Web Development", &["Express.js", "Middleware", "Routing", "REST APIs", "Authentication"]),
            ("Advanced", &["Child Processes", "Clusters", "Worker Threads", "Performance", "Security"]),
            ("Databases", &["MongoDB", "PostgreSQL", "Redis", "ORMs", "Connection Pooling"]),
            ("Modern Node", &["ES Modules", "TypeScript", "Microservices", "GraphQL", "Serverless"]),
        ]),
    );
    kb.insert_skill_topics(
        "SQL",
        topics(&[
            ("Fundamentals", &["SELECT Queries", "WHERE Clauses", "JOIN Operations", "GROUP BY", "ORDER BY"]),
            ("Advanced", &["Subqueries", "Window Functions", "Common Table Expressions", "Indexes", "Views"]),
            ("Databases", &["PostgreSQL", "MySQL", "SQLite", "MongoDB (NoSQL)", "Redis"]),
            ("Performance", &["Query Optimization", "Execution Plans", "Indexing Strategies", "Normalization"]),
            ("Modern SQL", &["JSON Operations", "Full-Text Search", "Geospatial Queries", "Time Series Data"]),
        ]),
    );
    kb.insert_skill_topics(
        "Docker",
        topics(&[
            ("Fundamentals", &["Containers vs VMs", "Docker Images", "Dockerfiles", "Docker Commands", "Volumes"]),
            ("Advanced", &["Multi-stage Builds", "Docker Compose", "Networking", "Security", "Docker Hub"]),
            ("Orchestration", &["Kubernetes Basics", "Pods", "Services", "Deployments", "ConfigMaps"]),
            ("DevOps", &["CI/CD Pipelines", "Docker in AWS", "Monitoring", "Logging", "Scaling"]),
            ("Best Practices", &["Image Optimization", "Security Scanning", "Multi-architecture", "Docker Desktop"]),
        ]),
    );
    kb.insert_skill_topics(
        "AWS",
        topics(&[
            ("Compute", &["EC2", "Lambda", "Elastic Beanstalk", "ECS/EKS", "Lightsail"]),
            ("Storage", &["S3", "EBS", "EFS", "Glacier", "RDS"]),
            ("Networking", &["VPC", "CloudFront", "Route 53", "API Gateway", "Load Balancers"]),
            ("Security", &["IAM", "KMS", "CloudTrail", "GuardDuty", "WAF"]),
            ("Modern AWS", &["Serverless", "Containers", "AI/ML Services", "IoT", "Edge Computing"]),
        ]),
    );
    kb.insert_skill_topics(
        "Machine Learning",
        topics(&[
            ("Fundamentals", &["Supervised Learning", "Unsupervised Learning", "Regression", "Classification", "Clustering"]),
            ("Algorithms", &["Linear Regression", "Decision Trees", "Neural Networks", "SVM", "Random Forest"]),
            ("Deep Learning", &["CNN", "RNN", "Transformers", "GANs", "Reinforcement Learning"]),
            ("Tools", &["Scikit-learn", "TensorFlow", "PyTorch", "Keras", "Jupyter"]),
            ("Applications", &["Computer Vision", "NLP", "Recommendation Systems", "Time Series", "Anomaly Detection"]),
        ]),
    );
    kb.insert_skill_topics(
        "Git",
        topics(&[
            ("Fundamentals", &["Repository Setup", "Basic Commands", "Branching", "Merging", "Stashing"]),
            ("Advanced", &["Rebasing", "Interactive Rebase", "Cherry Picking", "Bisect", "Submodules"]),
            ("Collaboration", &["Pull Requests", "Code Reviews", "GitHub Flow", "GitLab Flow", "Conflict Resolution"]),
            ("Tools", &["GitHub Desktop", "GitKraken", "SourceTree", "Git Extensions", "Git Hooks"]),
            ("Best Practices", &["Commit Messages", "Branch Naming", "Gitignore", "Large File Storage", "Security"]),
        ]),
    );
    kb.insert_skill_topics(
        "TypeScript",
        topics(&[
            ("Fundamentals", &["Type Annotations", "Interfaces", "Classes", "Generics", "Union Types"]),
            ("Advanced", &["Mapped Types", "Conditional Types", "Template Literal Types", "Decorators", "Utility Types"]),
            ("React + TS", &["Component Props", "Hooks with TS", "Generic Components", "Form Handling"]),
            ("Tools", &["tsconfig.json", "ESLint", "Prettier", "Type Definitions", "Declaration Files"]),
            ("Modern TS", &["TS 4.0+ Features", "Module Resolution", "Project References", "Strict Mode"]),
        ]),
    );
    kb.insert_skill_topics(
        "MongoDB",
        topics(&[
            ("Fundamentals", &["Documents", "Collections", "Databases", "CRUD Operations", "Query Operators"]),
            ("Advanced", &["Aggregation Pipeline", "Indexing", "Transactions", "Change Streams", "GridFS"]),
            ("Schema Design", &["Embedding vs Referencing", "Data Modeling", "Relationships", "Validation"]),
            ("Performance", &["Query Optimization", "Sharding", "Replication", "Profiling", "Monitoring"]),
            ("Integration", &["Node.js Driver", "Mongoose ODM", "Python Driver", "Spring Data", "Atlas"]),
        ]),
    );
}
