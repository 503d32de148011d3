//! End-to-end emission tests over complete compilation units.
//!
//! These build entity trees the way a host generator would and verify the
//! rendered C# text. Run `cargo insta review` to update snapshots when making
//! intentional changes.

use sharpgen::{
    Access, Attribute, Class, CompilationUnit, Field, GeneratorOptions, Method, Parameter,
    Property, ToolInfo,
};

fn options() -> GeneratorOptions {
    GeneratorOptions::csharp().with_tool(ToolInfo::new("sharpgen-tests", "0.0.0"))
}

#[test]
fn test_full_generated_file() {
    let class = Class::new("Person")
        .unwrap()
        .partial()
        .with_doc("A person record.")
        .with_property(
            Property::new("string", "Name")
                .unwrap()
                .with_value("unknown")
                .with_setter_body("this._name = value.Trim();"),
        )
        .with_property(Property::new("int", "Age").unwrap())
        .with_method(
            Method::partial("void", "OnNameChanged")
                .unwrap()
                .with_parameter(Parameter::new("string", "name").unwrap()),
        );

    let unit = options()
        .nullable(true)
        .compilation_unit("Person")
        .unwrap()
        .with_namespace("My.App.Models")
        .with_class(class);

    insta::assert_snapshot!(unit.render().trim_end(), @r###"
// <auto-generated>
// This code was generated by sharpgen-tests 0.0.0.
// Changes to this file may be lost when the code is regenerated.
// </auto-generated>
#nullable enable

namespace My.App.Models
{
    /// <summary>
    /// A person record.
    /// </summary>
    [global::System.CodeDom.Compiler.GeneratedCodeAttribute("sharpgen-tests", "0.0.0")]
    public partial class Person
    {
        private string _name = "unknown";

        public string Name
        {
            get
            {
                return this._name;
            }
            set
            {
                this._name = value.Trim();
            }
        }

        public int Age { get; set; }

        partial void OnNameChanged(string name);
    }
}

#nullable restore
"###);
}

#[test]
fn test_extension_method_class() {
    let class = Class::new("StringExtensions")
        .unwrap()
        .static_()
        .with_method(
            Method::new("Shout")
                .unwrap()
                .extension()
                .returns("string")
                .unwrap()
                .with_parameter(Parameter::new("string", "source").unwrap())
                .with_body("return source.ToUpperInvariant();"),
        );

    let unit = CompilationUnit::new("StringExtensions")
        .unwrap()
        .with_namespace("My.App")
        .with_class(class);

    insta::assert_snapshot!(unit.render().trim_end(), @r###"
namespace My.App
{
    public static class StringExtensions
    {
        public static string Shout(this string source)
        {
            return source.ToUpperInvariant();
        }
    }
}
"###);
}

#[test]
fn test_generic_class_with_docs_and_constraints() {
    let class = Class::new("Repository")
        .unwrap()
        .with_doc("Stores entities.")
        .with_generic_constraint("TEntity", "class")
        .with_generic_constraint("TEntity", "new()")
        .with_generic_doc("TEntity", "The stored entity type.")
        .with_interface("IRepository<TEntity>")
        .with_field(
            Field::new("List<TEntity>", "_items")
                .unwrap()
                .with_value("new List<TEntity>()"),
        )
        .with_method(
            Method::new("Add")
                .unwrap()
                .with_parameter(Parameter::new("TEntity", "item").unwrap())
                .with_body("this._items.Add(item);"),
        );

    let unit = CompilationUnit::new("Repository")
        .unwrap()
        .with_class(class);

    insta::assert_snapshot!(unit.render().trim_end(), @r###"
/// <summary>
/// Stores entities.
/// </summary>
/// <typeparam name="TEntity">The stored entity type.</typeparam>
public class Repository<TEntity> : IRepository<TEntity>
    where TEntity : class, new()
{
    private List<TEntity> _items = new List<TEntity>();

    public void Add(TEntity item)
    {
        this._items.Add(item);
    }
}
"###);
}

#[test]
fn test_sanitized_namespace_and_hint_name() {
    let options = options();
    let unit = options
        .compilation_unit("1 My Class")
        .unwrap()
        .with_namespace("namespace.my-app");
    assert_eq!(unit.namespace(), Some("@namespace.my_app"));
    assert_eq!(options.hint_name(unit.name()), "1 My Class.g.cs");
    assert_eq!(options.hint_name("Widgets.g.cs"), "Widgets.g.cs");
    assert_eq!(options.hint_name("Widgets.cs"), "Widgets.g.cs");
}

#[test]
fn test_attributes_and_async_method() {
    let class = Class::new("Fetcher")
        .unwrap()
        .with_attribute(
            Attribute::new("Obsolete")
                .unwrap()
                .with_argument("\"use FetcherV2\"")
                .with_property("UrlFormat", "\"https://example.com\""),
        )
        .with_method(
            Method::new("LoadAsync")
                .unwrap()
                .returns("Task<string>")
                .unwrap()
                .with_access(Access::Internal)
                .unwrap()
                .with_body("return await this.client.GetStringAsync(url);")
                .with_parameter(Parameter::new("string", "url").unwrap()),
        );

    let rendered = CompilationUnit::new("Fetcher")
        .unwrap()
        .with_class(class)
        .render();
    assert!(rendered.contains(
        "[Obsolete(\"use FetcherV2\", UrlFormat = \"https://example.com\")]"
    ));
    assert!(rendered.contains("internal async Task<string> LoadAsync(string url)"));
}

#[test]
fn test_empty_class_body_has_nothing_between_braces() {
    let rendered = CompilationUnit::new("Empty")
        .unwrap()
        .with_class(Class::new("Empty").unwrap().sealed())
        .render();
    assert_eq!(rendered, "public sealed class Empty\n{\n}\n");
}

#[test]
fn test_manual_member_lines_render_last() {
    let mut class = Class::new("Widget")
        .unwrap()
        .with_field(Field::new("int", "_count").unwrap());
    class
        .lines()
        .push("public event EventHandler? Changed;\n\npublic int Doubled => this._count * 2;");

    let rendered = CompilationUnit::new("Widget")
        .unwrap()
        .with_class(class)
        .render();
    assert_eq!(
        rendered,
        "public class Widget\n\
         {\n    \
             private int _count;\n\
         \n    \
             public event EventHandler? Changed;\n\
         \n    \
             public int Doubled => this._count * 2;\n\
         }\n"
    );
}
