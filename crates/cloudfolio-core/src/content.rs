//! Canonical portfolio content.
//!
//! The one authoritative copy of the page's data. Arrays are authored
//! most-recent-first; nothing downstream sorts them.

use crate::types::{
    CareerEntry, CertificationEntry, Portfolio, Profile, ProjectHighlight, SocialKind, SocialLink,
    ToolboxEntry,
};

impl Portfolio {
    /// The hand-authored content of the page.
    pub fn canonical() -> Self {
        Self {
            profile: profile(),
            toolbox: toolbox(),
            certifications: certifications(),
            career: career(),
            education: education(),
        }
    }
}

fn profile() -> Profile {
    Profile {
        name: "Maria Arpitha".to_string(),
        title: "Cloud Engineering & Solutioning".to_string(),
        photo_ref: "./images/profile.jpg".to_string(),
        photo_alt: "Maria Arpitha".to_string(),
        tagline: "Engineering the sky\u{2014}from concept to cloud, deployment to delivery."
            .to_string(),
        intro: "a Cloud and DevOps Engineer passionate about architecting, automating, and \
                optimizing cloud-native environments. I enjoy designing systems that are \
                scalable, reliable, and easy to operate, and I continually refine my craft \
                through hands\u{2011}on projects and real\u{2011}world problem\u{2011}solving."
            .to_string(),
        socials: vec![
            SocialLink::new(
                SocialKind::LinkedIn,
                "https://www.linkedin.com/in/maria-arpitha/",
            ),
            SocialLink::new(SocialKind::GitHub, "https://github.com/arpithaoncloud9"),
        ],
    }
}

fn toolbox() -> Vec<ToolboxEntry> {
    vec![
        ToolboxEntry::new(
            "\u{2601}\u{fe0f}",
            "Cloud Platforms",
            "AWS, GCP, Azure",
            "bg-sky-50 border-sky-300 text-sky-800",
        ),
        ToolboxEntry::new(
            "\u{1f6e0}\u{fe0f}",
            "Infrastructure as Code",
            "Terraform",
            "bg-emerald-50 border-emerald-300 text-emerald-800",
        ),
        ToolboxEntry::new(
            "\u{1f504}",
            "CI/CD Pipelines",
            "Jenkins, GitHub Actions, AWS CodeDeploy",
            "bg-indigo-50 border-indigo-300 text-indigo-800",
        ),
        ToolboxEntry::new(
            "\u{1f510}",
            "Security & Governance",
            "IAM, Shared Responsibility Model",
            "bg-yellow-50 border-yellow-300 text-yellow-800",
        ),
        ToolboxEntry::new(
            "\u{1f4ca}",
            "Monitoring & Logging",
            "Amazon CloudWatch, CloudTrail",
            "bg-pink-50 border-pink-300 text-pink-800",
        ),
        ToolboxEntry::new(
            "\u{1f4bb}",
            "Developer Tools",
            "Git, GitHub, JIRA",
            "bg-gray-50 border-gray-300 text-gray-800",
        ),
        ToolboxEntry::new(
            "\u{2328}\u{fe0f}",
            "Scripting",
            "Bash, YAML, JSON",
            "bg-gray-50 border-gray-300 text-gray-800",
        ),
    ]
}

fn certifications() -> Vec<CertificationEntry> {
    vec![
        CertificationEntry::new(
            "./images/aws-certified-cloudops-engineer-associate.png",
            "AWS Certified CloudOps Engineer Associate",
            "https://www.credly.com/earner/earned/badge/5463f0d0-a9b4-4dd8-a682-ce1365cfd338",
        ),
        CertificationEntry::new(
            "./images/aws-certified-ai-practitioner.png",
            "AWS Certified AI Practitioner",
            "https://www.credly.com/badges/6e46f52f-87f2-4987-83c7-35d9976c3406/public_url",
        ),
        CertificationEntry::new(
            "./images/aws-certified-solutions-architect-associate.png",
            "AWS Certified Solutions Architect Associate",
            "https://www.credly.com/badges/22f63035-f5af-4d21-834c-f07f9b9270f1/public_url",
        ),
        CertificationEntry::new(
            "./images/cloud-digital-leader-certification.png",
            "GCP Cloud Digital Leader",
            "https://www.credly.com/badges/78c4967e-c644-48ac-81f6-01bc9cdb4b47/public_url",
        ),
        CertificationEntry::new(
            "./images/generative-ai-leader-certification.png",
            "GCP Generative AI Leader",
            "https://www.credly.com/badges/2d83d54d-0155-4d3a-8548-f3fdb00390d1/public_url",
        ),
        CertificationEntry::new(
            "./images/microsoft-certified-fundamentals-badge.svg",
            "Microsoft Certified Azure Fundamentals",
            "https://learn.microsoft.com/api/credentials/share/en-us/MariaArpithaSagayam-9407/CF7812BB393EBA89?sharingId=E866A35C9F6DED0F",
        ),
        CertificationEntry::new(
            "./images/asset_44psmi_0.png",
            "Professional Scrum Master I",
            "https://www.credly.com/badges/dbb057a2-2e8b-4774-b6b3-a49438a7f2ca",
        ),
    ]
}

fn career() -> Vec<CareerEntry> {
    vec![
        CareerEntry::new(
            "Cloud & DevOps Engineer",
            "United States",
            "2023 \u{2013} Present",
            "Focused on architecting and automating production-grade cloud systems with strong \
             emphasis on security, scalability, and operational excellence.",
        )
        .with_projects(vec![
            ProjectHighlight::new(
                "AWS Serverless CRUD API Project",
                "text-brown-600",
                &[
                    "Built a fully serverless REST API using AWS Lambda, API Gateway, and DynamoDB to support complete CRUD operations.",
                    "Implemented secure IAM roles, structured data models, and validated all endpoints using Postman and DynamoDB results.",
                ],
            ),
            ProjectHighlight::new(
                "3\u{2011}Tier AWS Project",
                "text-blue-600",
                &[
                    "Architected and implemented a production-style AWS 3-tier environment using Terraform (VPC, ALB, EC2, RDS).",
                    "Enabled secure private-subnet application hosting via SSM and PM2.",
                    "Implemented automated zero-touch deployments using GitHub Actions, S3, and SSM.",
                ],
            ),
            ProjectHighlight::new(
                "Serverless Password Rotation",
                "text-green-600",
                &[
                    "Developed an automated password-rotation system using AWS Lambda, Secrets Manager, and EventBridge.",
                    "Implemented secure, KMS-encrypted secret rotation with least-privilege IAM.",
                    "Validated scheduled end-to-end rotation execution.",
                ],
            ),
            ProjectHighlight::new(
                "Automated CI/CD Pipeline",
                "text-purple-600",
                &[
                    "Built a fully automated CI/CD pipeline using GitHub Actions and AWS EC2.",
                    "Implemented CI stages for tests, builds, and artifact packaging.",
                    "Delivered zero-touch deployments to EC2 for consistent, production-ready releases.",
                ],
            ),
            ProjectHighlight::new(
                "Static Website Hosting on AWS",
                "text-yellow-600",
                &[
                    "Architected and deployed a production-ready static site using S3, CloudFront, Route 53, IAM, and CloudWatch.",
                    "Implemented HTTPS, caching strategies, monitoring, and cost-optimized storage.",
                ],
            ),
            ProjectHighlight::new(
                "Full DevOps Pipeline for a Full\u{2011}Stack Application",
                "text-red-600",
                &[
                    "Designed and deployed a complete CI/CD and infrastructure automation workflow using GitHub Actions, Terraform, AWS CLI, EC2, ALB, RDS MySQL, and CloudWatch.",
                    "Built a custom VPC, provisioned compute resources, configured load balancing, and automated deployments.",
                    "Delivered a scalable, production-ready environment with end-to-end automation.",
                ],
            ),
        ]),
        CareerEntry::new(
            "Cloud Support Engineer",
            "Excelsoft Technologies - Mysore",
            "Jul 2021 - Feb 2023",
            "Worked on designing, provisioning, and maintaining cloud infrastructure for \
             large-scale online examination platforms.",
        )
        .with_bullets(&[
            "Engineered scalable and reliable cloud infrastructure to support high-availability exam systems.",
            "Automated provisioning AWS core services like VPC, EC2, S3, RDS and Lambda using parameterized Terraform templates.",
            "Optimized resource utilization and performance through monitoring and tuning.",
            "Implemented IAM roles, policies, and least\u{2011}privilege access patterns.",
            "Provisioned CloudWatch metrics, dashboards, and alarms as code.",
            "Troubleshot cross-stack issues spanning infrastructure, application, and security layers.",
            "Maintained AWS infrastructure code in GitHub for version control and automation.",
        ]),
        CareerEntry::new(
            "AWS Cloud Trainer",
            "IIHT \u{2013} Bangalore",
            "Mar 2020 \u{2013} May 2021",
            "Focused on knowledge sharing and building strong cloud fundamentals for aspiring engineers.",
        )
        .with_bullets(&[
            "Led AWS training programs covering core cloud concepts and services.",
            "Designed and delivered hands-on labs.",
            "Collaborated with senior engineers to simplify technical concepts.",
            "Built Jenkins\u{2011}based CI/CD pipelines.",
            "Gained exposure to Docker for packaging applications.",
        ]),
        CareerEntry::new(
            "Junior Associate",
            "KGISL \u{2013} Bangalore",
            "Jun 2017 \u{2013} Feb 2020",
            "Played a key role in customer support, ensuring quick issue resolution and a \
             positive client experience.",
        )
        .with_bullets(&[
            "Provided customer support to U.S. clients.",
            "Collaborated with teams to escalate issues and improve service delivery.",
        ]),
    ]
}

fn education() -> Vec<CareerEntry> {
    vec![CareerEntry::new(
        "JSS Academy of Technical Education (JSSATE)",
        "Bangalore, India",
        "2013 \u{2013} 2017",
        "Bachelors in Information Science & Engineering",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_section_sizes() {
        let portfolio = Portfolio::canonical();
        assert_eq!(portfolio.toolbox.len(), 7);
        assert_eq!(portfolio.certifications.len(), 7);
        assert_eq!(portfolio.career.len(), 4);
        assert_eq!(portfolio.education.len(), 1);
        assert_eq!(portfolio.profile.socials.len(), 2);
    }

    #[test]
    fn career_is_most_recent_first() {
        let titles: Vec<_> = Portfolio::canonical()
            .career
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Cloud & DevOps Engineer",
                "Cloud Support Engineer",
                "AWS Cloud Trainer",
                "Junior Associate",
            ]
        );
    }

    #[test]
    fn only_the_current_role_has_projects() {
        let career = Portfolio::canonical().career;
        assert_eq!(career[0].projects.len(), 6);
        assert!(career[1..].iter().all(|e| e.projects.is_empty()));
    }

    #[test]
    fn canonical_content_is_lint_clean() {
        assert!(Portfolio::canonical().lint().is_empty());
    }
}
