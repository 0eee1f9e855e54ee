//! The development-journey narrative of the calendar management application.

use crate::deck::Deck;
use crate::deck::descriptor::SlideDescriptor;

pub const DECK_TITLE: &str = "ASP.NET Core Calendar Management Application";
pub const DECK_SUBTITLE: &str =
    "Development Journey: From Concept to Implementation\nBuilt with Claude AI";

/// Build the full deck: a title slide and 21 title-and-body slides.
pub fn development_journey() -> Deck {
    let mut deck = Deck::new();

    deck.push(SlideDescriptor::title_slide(DECK_TITLE, DECK_SUBTITLE));

    deck.push(
        SlideDescriptor::content("Initial Request")
            .point("User Request:")
            .detail(quoted(
                "Create an ASP.NET Core application using C# to manage calendars. This application should have a calendar view by month, week and day, should be able to manage users and create calendar invites for one or more users.",
            )),
    );

    deck.push(
        SlideDescriptor::content("Technical Decisions")
            .point("Key Technology Choices:")
            .details([
                "Database: SQLite with Entity Framework Core",
                "UI Framework: ASP.NET Core with Razor Pages",
                "Authentication: None (focus on core functionality)",
                "Styling: Bootstrap 5",
                "Target Framework: .NET 9.0",
            ]),
    );

    deck.push(
        SlideDescriptor::content("Database Architecture")
            .point("Three Core Tables:")
            .details([
                "Users: Id, Name, Email, CreatedAt",
                "CalendarEvents: Id, Title, Description, StartDateTime, EndDateTime, Location, CreatedById",
                "EventAttendees: Id, EventId, UserId, ResponseStatus (Pending/Accepted/Declined/Tentative)",
            ]),
    );

    deck.push(
        SlideDescriptor::content("Initial Implementation")
            .point("Core Features Implemented:")
            .details([
                "Three calendar view types: Month, Week, Day",
                "User management (CRUD operations)",
                "Event creation with multi-user invitations",
                "Event details, editing, and deletion",
                "Attendee tracking with response status",
                "Navigation between different time periods",
            ]),
    );

    deck.push(iteration(
        "Iteration 1: Clean Start",
        "Remove all seeded data from this application",
        IMPLEMENTATION,
        &[
            "Updated DbInitializer to start with empty database",
            "Removed all sample users and events",
        ],
    ));

    deck.push(iteration(
        "Iteration 2: Interactive Timeslots",
        "When clicking on a timeslot open the create event window with the date and time populated.",
        IMPLEMENTATION,
        &[
            "Added year/month/day/hour parameters to CreateEvent",
            "Made day numbers in Month view clickable",
            "Made timeslots in Week and Day views clickable",
            "Pre-populate event form with selected date/time",
        ],
    ));

    deck.push(iteration(
        "Iteration 3: Major Architecture Change",
        "Change all views to use Razor pages",
        "Complete Refactor:",
        &[
            "Converted from MVC Controllers to Razor PageModels",
            "Updated Program.cs from AddControllersWithViews to AddRazorPages",
            "Created Pages folder structure with _Layout, _ViewStart, _ViewImports",
            "Updated all navigation from asp-action to asp-page",
            "Fixed build errors and updated routing",
        ],
    ));

    deck.push(iteration(
        "Iteration 4: Better Time Defaults",
        "When clicking on a day from the month or week calendar open the create event window with the date and time populated. If on a day, default the time to noon.",
        IMPLEMENTATION,
        &[
            "Changed default time from 9 AM to 12 PM (noon)",
            "Maintained specific hour when clicking timeslots",
        ],
    ));

    deck.push(iteration(
        "Iteration 5: Enhanced User Experience",
        "If a user clicks on any part of a day, not just the number, open the create event page",
        IMPLEMENTATION,
        &[
            "Added onclick handler to entire <td> day cell",
            "Added event.stopPropagation() to event items",
            "Added CSS hover effects for better UX",
            "Made entire day cell visually responsive",
        ],
    ));

    deck.push(iteration(
        "Iteration 6: Visual Navigation",
        "On week and month views add arrow icons to navigate by month and week respectively",
        IMPLEMENTATION,
        &[
            "Added ◄ and ► icons to Previous/Next buttons",
            "Applied to Month, Week, and Day views for consistency",
        ],
    ));

    deck.push(iteration(
        "Iteration 7: Layout Refinement",
        "Add the navigation buttons next to the description of the month and week",
        IMPLEMENTATION,
        &[
            "Moved navigation buttons inline with month/week title",
            "Used Bootstrap d-inline-block for side-by-side layout",
            "Maintained Create Event button on the right",
            "Improved visual hierarchy and space utilization",
        ],
    ));

    deck.push(iteration(
        "Iteration 8: Enhanced Navigation",
        "Move the navigation buttons back to the middle of the page and add 2 more buttons next and previous on the left and right of the month name or week name",
        IMPLEMENTATION,
        &[
            "Created git branch: feature/enhanced-navigation",
            "Added arrow-only buttons flanking the month/week title",
            "Restored full navigation button group to center",
            "Three-column layout: Title with arrows | Navigation | Create Event",
            "Improved accessibility with title attributes on arrow buttons",
        ],
    ));

    deck.push(iteration(
        "Iteration 9: Frontend/Backend Separation",
        "Rebuild this application. Separate all calls into a front end and a back end API.",
        IMPLEMENTATION,
        &[
            "Created solution with two projects: CalendarManagement.API and CalendarManagement.Web",
            "API: ASP.NET Core with Controllers, EF Core, SQLite, and Swagger",
            "Web: ASP.NET Core Razor Pages calling API via HttpClient",
            "CalendarApiClient service for centralized API communication",
            "CORS configuration to allow cross-origin requests",
            "Separation of concerns: API handles data, Web handles presentation",
        ],
    ));

    deck.push(
        SlideDescriptor::content("New Solution Architecture")
            .point("Two-Project Structure:")
            .point("CalendarManagement.API (Backend):")
            .details([
                "  - Models, Data, Controllers",
                "  - Entity Framework Core + SQLite",
                "  - RESTful API endpoints",
                "  - Swagger/OpenAPI documentation",
            ])
            .spacer()
            .point("CalendarManagement.Web (Frontend):")
            .details([
                "  - Razor Pages, ViewModels",
                "  - CalendarApiClient service",
                "  - HttpClient for API communication",
                "  - No direct database access",
            ]),
    );

    deck.push(
        SlideDescriptor::content("Project Structure")
            .point("Key Folders and Files:")
            .details([
                "API: Models, Data (DbContext, DbInitializer), Controllers (Users, CalendarEvents)",
                "Web: Models (DTOs), ViewModels, Services (CalendarApiClient), Pages (Razor)",
                "Shared: wwwroot/css for styling",
                "Configuration: appsettings.json in both projects",
            ]),
    );

    deck.push(
        SlideDescriptor::content("Final Application Features")
            .point("What the Application Can Do:")
            .details([
                "View calendar in three formats: Month, Week, Day",
                "Navigate between time periods with arrow buttons",
                "Click anywhere on a day/timeslot to create events",
                "Create events with title, description, location, date/time",
                "Invite multiple users to events",
                "Track attendee response status (Pending/Accepted/Declined/Tentative)",
                "Manage users (Create, Read, Update, Delete)",
                "View event details with attendee list",
                "Edit and delete events",
            ]),
    );

    deck.push(iteration(
        "Iteration 10: Service Layer Refactoring",
        "Extract all logic from this application's controllers into a service layer",
        IMPLEMENTATION,
        &[
            "Created ICalendarEventService and CalendarEventService (10 methods, ~290 lines)",
            "Created IUserService and UserService (7 methods, ~95 lines)",
            "Registered services with dependency injection in Program.cs",
            "Refactored all 10 PageModels to use service layer",
            "Reduced PageModel code by ~70% on average",
            "Separated business logic from HTTP handling",
            "Improved testability, reusability, and maintainability",
        ],
    ));

    deck.push(
        SlideDescriptor::content("Service Layer Architecture Benefits")
            .point("Why Service Layer Matters:")
            .details([
                "Separation of Concerns: PageModels handle HTTP, services handle business logic",
                "Testability: Services can be unit tested independently with mocked data",
                "Reusability: Same services can power future API controllers",
                "Maintainability: Business logic changes in one place, not scattered across pages",
                "Scalability: Easy to add caching, logging, and other cross-cutting concerns",
                "Code Reduction: Calendar pages went from 60-70 lines to ~20 lines",
                "SOLID Principles: Follows Single Responsibility and Dependency Inversion",
            ]),
    );

    deck.push(
        SlideDescriptor::content("Development Insights")
            .point("Key Takeaways:")
            .details([
                "Iterative development allows for rapid evolution",
                "User feedback drives feature refinement",
                "Architecture changes (MVC → Razor Pages → API/Frontend → Service Layer) are transformative",
                "Small UX improvements (clickable areas, icons) have big impact",
                "Starting with empty database is better for production readiness",
                "Interactive elements require careful event handling",
                "Visual cues (arrows, hover effects) improve usability",
                "Git branching enables safe experimentation with UI changes",
                "Separating frontend and backend enables scalability and maintainability",
                "Service layer refactoring dramatically improves code quality and maintainability",
            ]),
    );

    // No lead-in line: every entry is a top-level point
    deck.push(SlideDescriptor::content("Complete Technology Stack").points([
        "Architecture: Service Layer Pattern with dependency injection",
        "Backend API: ASP.NET Core 9.0 with Controllers",
        "Frontend: ASP.NET Core 9.0 with Razor Pages",
        "Language: C# 12",
        "Database: SQLite",
        "ORM: Entity Framework Core 9.0",
        "API Documentation: Swagger/OpenAPI",
        "Communication: HttpClient, RESTful APIs",
        "UI Framework: Bootstrap 5",
        "Tools: Visual Studio / VS Code, dotnet CLI",
        "Version Control: Git",
    ]));

    deck.push(
        SlideDescriptor::content("Summary")
            .point("Project Evolution:")
            .details([
                "From initial concept to fully functional application through 10 iterations",
                "Each user request refined and enhanced the application",
                "Demonstrates the power of iterative, AI-assisted development",
                "Final result: A professional, well-architected calendar management system with clean separation of concerns, ready for testing and deployment",
            ]),
    );

    deck
}

const IMPLEMENTATION: &str = "Implementation:";

/// An iteration slide: the user's request quoted under "User Request:",
/// then the changes under `action`.
fn iteration(title: &str, request: &str, action: &str, changes: &[&str]) -> SlideDescriptor {
    SlideDescriptor::content(title)
        .point("User Request:")
        .detail(quoted(request))
        .point(action)
        .details(changes.iter().copied())
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{OutlineEntry, SlideLayout};

    #[test]
    fn test_slide_count_and_layouts() {
        let deck = development_journey();
        assert_eq!(deck.len(), 22);
        assert_eq!(deck.slides()[0].layout(), SlideLayout::Title);
        assert!(
            deck.iter()
                .skip(1)
                .all(|s| s.layout() == SlideLayout::TitleAndBody)
        );
    }

    #[test]
    fn test_iteration_shape() {
        let deck = development_journey();
        let slide = deck.find("Iteration 4: Better Time Defaults").unwrap();
        let outline = slide.outline();

        assert_eq!(outline[0], OutlineEntry::Point("User Request:".into()));
        assert!(outline[1].text().starts_with('"') && outline[1].text().ends_with('"'));
        assert_eq!(outline[1].level(), 1);
        assert_eq!(outline[2], OutlineEntry::Point("Implementation:".into()));
        assert_eq!(outline.len(), 5);
    }

    #[test]
    fn test_iteration_ten_keeps_apostrophe() {
        let deck = development_journey();
        let slide = deck.find("Iteration 10: Service Layer Refactoring").unwrap();
        assert_eq!(
            slide.outline()[1].text(),
            "\"Extract all logic from this application's controllers into a service layer\""
        );
    }
}
